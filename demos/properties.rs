//! A quick tour of the Bag API: setting, typed retrieval, and the
//! presence-flag contract.

use sovran_bag::{Bag, Entries};

fn main() {
    let bag = Bag::new();

    bag.set("title", "nightly build");
    bag.set("build", 1842);
    bag.set("signed", true);
    bag.set("digest", vec![0x9au8, 0x3f, 0x11, 0x07]);

    println!("title:  {:?}", bag.get_string("title"));
    println!("build:  {:?}", bag.get_int("build"));
    println!("signed: {:?}", bag.get_bool("signed"));
    println!("digest: {:?}", bag.get_bytes("digest"));

    // Shape mismatch and absence both come back as None.
    println!("title as int:   {:?}", bag.get_int("title"));
    println!("missing string: {:?}", bag.get_string("missing"));

    // Legacy-style callers can fall back to zero values explicitly.
    let label = bag.get_string("missing").unwrap_or_default();
    println!("label with default: {label:?}");

    // Pre-populate a second bag by handing over a map wholesale.
    let mut seed = Entries::new();
    seed.insert("env".to_owned(), "staging".into());
    let staged = Bag::from(seed);
    println!("env: {:?}", staged.get_string("env"));

    println!("keys: {:?}", bag.keys());
}
