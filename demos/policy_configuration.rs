//! Policy configuration demonstration.
//!
//! This example walks through the TagPolicyBuilder surface:
//! 1. Rename rules, typed and in `from:to` text form
//! 2. The default drop set and how touching it replaces the default
//! 3. Precedence when one name lands in several rule sets
//! 4. The two quote-handling modes
//!
//! Run with: `cargo run --example policy_configuration`

use tagfilter_core::{filter_str, QuoteMode, TagAction, TagPolicy, DEFAULT_DROP_TAGS};

fn main() {
    println!("=== Policy Configuration Example ===\n");

    println!("--- Scenario 1: Defaults ---");
    let policy = TagPolicy::default();
    println!("Default drop set: {:?}", DEFAULT_DROP_TAGS);
    println!("head  -> {:?}", policy.classify("head"));
    println!("style -> {:?}", policy.classify("style"));
    println!("p     -> {:?}\n", policy.classify("p"));

    println!("--- Scenario 2: Rename Specs from Configuration Text ---");
    // `from:to` renames, a bare `name` renames to itself, and specs
    // without a source name are skipped with a warning.
    let policy = TagPolicy::builder()
        .rename_specs(["html:div", "b:strong", "em", ":broken"])
        .build();
    for name in ["html", "b", "em", "broken"] {
        println!("{:7} -> {:?}", name, policy.classify(name));
    }
    println!();

    println!("--- Scenario 3: Replacing the Drop Set ---");
    let policy = TagPolicy::builder().drop_tags(["script"]).build();
    println!("script -> {:?}", policy.classify("script"));
    println!("head   -> {:?} (default no longer applies)", policy.classify("head"));
    let policy = TagPolicy::builder()
        .drop_tags(std::iter::empty::<&str>())
        .build();
    println!("With an explicit empty set, head -> {:?}\n", policy.classify("head"));

    println!("--- Scenario 4: Precedence ---");
    // The same name in every set resolves as drop > unwrap > rename.
    let policy = TagPolicy::builder()
        .rename("aside", "div")
        .unwrap_tag("aside")
        .drop_tag("aside")
        .build();
    println!("aside -> {:?}", policy.classify("aside"));
    assert_eq!(policy.classify("aside"), TagAction::Drop);
    println!("(the builder logs a warning for each overlapping name)\n");

    println!("--- Scenario 5: Quote Modes ---");
    let input = r#"<p title="<b>bold</b>">text</p>"#;
    let transparent = TagPolicy::builder().rename("b", "strong").build();
    let tracked = TagPolicy::builder()
        .rename("b", "strong")
        .quote_mode(QuoteMode::Tracked)
        .build();
    println!("Input:       {}", input);
    println!("Transparent: {}", filter_str(input, &transparent));
    println!("Tracked:     {}", filter_str(input, &tracked));

    println!("\n=== Key Takeaways ===");
    println!("1. Building a policy never fails; bad specs degrade and warn");
    println!("2. The default drop set applies only while untouched");
    println!("3. Overlaps resolve as drop > unwrap > rename > passthrough");
    println!("4. Quote handling is part of the policy, not the filter");
}
