//! Basic tag filtering demonstration.
//!
//! This example shows the core transformation of tagfilter-core:
//! 1. Build a TagPolicy mapping tag names to actions
//! 2. Feed markup through the filter
//! 3. Renamed tags keep their attributes, unwrapped tags keep their
//!    content, dropped tags lose both
//!
//! Run with: `cargo run --example basic_filtering`

use tagfilter_core::{filter_str, TagPolicy};

fn main() {
    println!("=== Basic Tag Filtering Example ===\n");

    // The embedding policy: a scraped page becomes a fragment that can sit
    // inside a host document.
    let policy = TagPolicy::builder()
        .rename("html", "div")
        .unwrap_tag("body")
        .drop_tags(["head", "style"])
        .build();

    println!("--- Scenario 1: Full Page ---");
    let page = "<html><head><title>My Page</title></head><body><p>Hello</p></body></html>";
    println!("Input:  {}", page);
    println!("Output: {}\n", filter_str(page, &policy));

    println!("--- Scenario 2: Attributes Survive ---");
    let page = r#"<html lang="en"><body class="dark"><p>Hi</p></body></html>"#;
    println!("Input:  {}", page);
    println!("Output: {}\n", filter_str(page, &policy));

    println!("--- Scenario 3: Inline Styles Disappear ---");
    let page = "text before <style>p { color: red; }</style> text after";
    println!("Input:  {}", page);
    println!("Output: {}\n", filter_str(page, &policy));

    println!("--- Scenario 4: Markup Inside Attribute Values ---");
    // Quoted attribute text is scanned like content by default, so the
    // embedded <body> element is unwrapped right inside the value.
    let page = r#"<p data-x="<body>embedded</body>">paragraph</p>"#;
    println!("Input:  {}", page);
    println!("Output: {}\n", filter_str(page, &policy));

    println!("--- Scenario 5: Malformed Markup Is Just Text ---");
    let inputs = [
        "a < b and b > c",
        "unterminated <htm",
        "<>empty</>",
        "<!-- a comment -->",
    ];
    for input in inputs {
        println!("Input:  {}", input);
        println!("Output: {}", filter_str(input, &policy));
    }

    println!("\n=== Key Takeaways ===");
    println!("1. Rename swaps the tag name and keeps attribute text");
    println!("2. Unwrap deletes markers, drop deletes markers and content");
    println!("3. Anything that is not a resolvable tag token passes through");
    println!("4. Filtering never fails; there is no markup it rejects");
}
