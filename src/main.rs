use anyhow::Context;
use wordpair_rules::{ClusteringConfig, TrainingElement};

/// Runs the worked example from the word-pair rewrite-rule documentation
/// end to end: align, derive a transformation, and cluster it against a
/// couple of related pairs.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let pair = TrainingElement::new("liegen", "gelegen");
    println!("{} -> {}", pair.word_a(), pair.word_b());
    println!("segmentation: {:?}", pair.segmentation());
    println!("transformation: {}", pair.transformation());

    let rebuilt = pair
        .transformation()
        .apply(pair.word_a())
        .with_context(|| format!("transformation derived from ({}, {}) failed to reapply", pair.word_a(), pair.word_b()))?;
    println!("apply(word_a) == word_b: {}", rebuilt == pair.word_b());

    let set = ClusteringConfig::default().build([
        ("liegen".to_string(), "gelegen".to_string()),
        ("schmieren".to_string(), "geschmiert".to_string()),
        ("spielen".to_string(), "gespielt".to_string()),
    ]);

    println!("\n{} cluster(s):", set.len());
    for view in set.snapshot() {
        println!("  {} (from {} pair(s))", view.transformation(), view.members().len());
        for member in view.members() {
            let applied = view
                .transformation()
                .apply(member.word_a())
                .with_context(|| format!("cluster transformation failed to reapply to {}", member.word_a()))?;
            println!("    {} -> {} (reapplied: {})", member.word_a(), member.word_b(), applied);
        }
    }

    Ok(())
}
