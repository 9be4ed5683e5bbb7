//! Ranks the words of a short passage with both selectors.
use topwords::prelude::*;

const PASSAGE: &str = "Happy families are all alike; every unhappy family is unhappy in its \
own way. Everything was in confusion in the Oblonskys' house. The wife had discovered that \
the husband was carrying on an intrigue with a French girl, who had been a governess in \
their family, and she had announced to her husband that she could not go on living in the \
same house with him.";

fn main() {
  println!("=== Topwords Example ===\n");

  for method in [SelectionMethod::Linear, SelectionMethod::Heap] {
    let ranker = WordRanker::builder().selection(method).limit(5).build();
    let report = ranker.report(PASSAGE);

    println!("{:?} selector ({} words, {} distinct):", method, report.total, report.distinct);
    print!("{}", report);
    println!();
  }
}
