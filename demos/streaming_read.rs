//! Streaming filter demonstration.
//!
//! This example shows TagFilter as an io::Read adapter:
//! 1. Wrap any reader, then read filtered bytes out of it
//! 2. The source is pulled lazily, so huge documents stream in constant
//!    memory
//! 3. Chunk sizes never affect the output
//!
//! A tracing subscriber is installed at TRACE level so the filter's
//! internal events are visible: drop spans opening and closing, tokens
//! flushed as text, policies being built.
//!
//! Run with: `cargo run --example streaming_read`

use std::io::Read;

use tagfilter_core::{TagFilter, TagPolicy};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let policy = TagPolicy::builder()
        .rename("html", "div")
        .unwrap_tag("body")
        .drop_tags(["head", "style"])
        .build();

    let page = "<html><head><title>Streamed</title>\
                <style>body { margin: 0 }</style></head>\
                <body><h1>Title</h1><p>Body text</p></body></html>";

    println!("=== Streaming Read Example ===\n");

    // Scenario 1: read everything through the adapter at once.
    println!("--- Scenario 1: read_to_string ---");
    let mut filter = TagFilter::with_policy(page.as_bytes(), policy.clone());
    let mut output = String::new();
    filter
        .read_to_string(&mut output)
        .expect("reading from a slice cannot fail");
    println!("Filtered: {}\n", output);

    // Scenario 2: small fixed-size reads, as a copy loop would issue.
    println!("--- Scenario 2: 8-byte reads ---");
    let mut filter = TagFilter::with_policy(page.as_bytes(), policy.clone());
    let mut buf = [0u8; 8];
    let mut pieces = Vec::new();
    loop {
        let read = filter.read(&mut buf).expect("slice reads cannot fail");
        if read == 0 {
            break;
        }
        pieces.push(String::from_utf8_lossy(&buf[..read]).into_owned());
    }
    println!("Pieces: {:?}", pieces);
    println!("Joined: {}\n", pieces.concat());

    // Scenario 3: byte-at-a-time, the smallest possible consumer.
    println!("--- Scenario 3: read_byte ---");
    let mut filter = TagFilter::with_policy("a<head>gone</head>b".as_bytes(), policy);
    let mut bytes = Vec::new();
    while let Some(byte) = filter.read_byte().expect("slice reads cannot fail") {
        bytes.push(byte);
    }
    println!(
        "Bytes {:?} spell {:?}",
        bytes,
        String::from_utf8_lossy(&bytes)
    );

    println!("\n=== Key Takeaways ===");
    println!("1. TagFilter is a plain reader; anything taking Read accepts it");
    println!("2. Every read size produces the same overall byte stream");
    println!("3. Only a source read error can make the filter fail");
}
