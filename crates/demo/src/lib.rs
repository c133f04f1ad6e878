//! Console walkthrough of the sequence, sort and factory crates.

use std::fmt::Display;
use std::io::{self, Write};

use clap::Parser;
use factory::{InputSource, PersonFactory, RandomNumberFactory, create_array};
use sequence::{ArrayList, LinkedList, Sequence};
use sort::{Book, ByLength, ByPrice, sort};
use tracing::{error, info};

pub const WORDS: [&str; 4] = ["apple", "banana", "kiwi", "grape"];

#[derive(Parser, Debug, Clone)]
#[command(name = "demo")]
#[command(about = "Walks through generic sequences, comparator sorting and factories")]
pub struct Args {
    /// How many random numbers to generate
    #[arg(short, long, default_value_t = 5)]
    pub count: usize,

    /// How many people to read from standard input
    #[arg(short, long, default_value_t = 0)]
    pub people: usize,

    /// Seed for the random number factory
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run<I: InputSource, W: Write>(args: &Args, input: I, out: &mut W) -> io::Result<()> {
    let mut array = ArrayList::new();
    run_sequence(&mut array);
    writeln!(out, "ArrayList count: {}", array.count())?;

    let mut linked = LinkedList::new();
    run_sequence(&mut linked);
    writeln!(out, "LinkedList count: {}", linked.count())?;

    let mut words = WORDS;
    sort(&mut words, &ByLength);
    writeln!(out, "Sorted strings: {}", join(&words))?;

    let mut books = catalogue();
    sort(&mut books, &ByPrice);
    writeln!(out, "Books by price: {}", join(&books))?;

    let mut numbers_factory = match args.seed {
        Some(seed) => RandomNumberFactory::seeded(seed),
        None => RandomNumberFactory::new(),
    };
    let Ok(numbers) = create_array(&mut numbers_factory, args.count);
    writeln!(out, "Random numbers: {}", join(&numbers))?;

    if args.people > 0 {
        info!(count = args.people, "reading people");
        let mut people_factory = PersonFactory::new(input);
        match create_array(&mut people_factory, args.people) {
            Ok(people) => {
                for person in &people {
                    writeln!(out, "Person: {person}")?;
                }
            }
            Err(err) => {
                error!(error = %err, "reading people failed");
                writeln!(out, "Could not read people: {err}")?;
            }
        }
    }

    Ok(())
}

fn run_sequence<S: Sequence<Item = i32>>(seq: &mut S) {
    seq.add(10);
    seq.add(20);
    seq.remove(&10);
}

fn catalogue() -> Vec<Book> {
    vec![
        Book::new("Structure and Interpretation of Computer Programs", 54.0),
        Book::new("Dune", 9.99),
        Book::new("The Rust Programming Language", 39.95),
    ]
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
