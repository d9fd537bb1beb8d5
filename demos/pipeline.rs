//! Demonstrates using a Bag as the shared properties channel between
//! loosely coupled pipeline stages running on their own threads.
//!
//! A fetch stage records what it "downloaded", a parse stage reads those
//! properties and records its own, and the main thread reports on both.
//! Neither stage knows the other's types; the bag mediates.

use sovran_bag::Bag;
use std::collections::HashMap;
use std::thread;

fn fetch_stage(bag: Bag) {
    bag.set("source.url", "https://example.com/feed");
    bag.set("source.bytes", vec![b'<', b'o', b'k', b'>']);
    bag.set("source.status", 200);

    let mut headers = HashMap::new();
    headers.insert("content-type".to_owned(), "application/xml".to_owned());
    headers.insert("etag".to_owned(), "\"33a64df5\"".to_owned());
    bag.set("source.headers", headers);
}

fn parse_stage(bag: Bag) {
    // Tolerate a missing or differently shaped payload; absent input just
    // means this stage records nothing.
    let Some(raw) = bag.get_bytes("source.bytes") else {
        bag.set("parse.ok", false);
        return;
    };

    bag.set("parse.ok", true);
    bag.set("parse.element_count", raw.iter().filter(|b| **b == b'<').count() as i64);
}

fn main() {
    let bag = Bag::new();

    let fetch = {
        let bag = bag.clone();
        thread::spawn(move || fetch_stage(bag))
    };
    fetch.join().expect("fetch stage panicked");

    let parse = {
        let bag = bag.clone();
        thread::spawn(move || parse_stage(bag))
    };
    parse.join().expect("parse stage panicked");

    println!("url:     {:?}", bag.get_string("source.url"));
    println!("status:  {:?}", bag.get_int("source.status"));
    println!("parsed:  {:?}", bag.get_bool("parse.ok"));
    println!("elements: {:?}", bag.get_int("parse.element_count"));

    if let Some(headers) = bag.get_string_map("source.headers") {
        for (name, value) in &headers {
            println!("header {name}: {value}");
        }
    }

    println!("\nfinal properties ({} keys):", bag.len());
    for (key, value) in bag.snapshot() {
        println!("  {key} = {value:?}");
    }
}
