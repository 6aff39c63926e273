//! # Lemmadex
//!
//! Lemmadex turns a pre-split Wikipedia dump into per-profession lemma
//! frequency indices, in three chained jobs:
//!
//! ```sh
//! lemmadex filter <src> <dst> --allowlist people.txt
//! lemmadex index  <src> <dst> --stopwords stopwords.txt
//! lemmadex invert <src> <dst> --groups professions.txt [--probabilities]
//! ```
//!
//! Each job reads `part-*` files from `src` and writes `part-NNNNN.txt`
//! files plus a `run_report.json` into `dst`, so the output of one job is
//! the input of the next.
use structopt::StructOpt;

#[macro_use]
extern crate log;

use lemmadex::cli;
use lemmadex::error::Error;
use lemmadex::pipelines::{ArticleFilter, GroupInvert, LemmaIndex, Pipeline};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Lemmadex::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Lemmadex::Filter(f) => {
            let p = ArticleFilter::new(f.src, f.dst, f.allowlist);
            p.run()?;
        }
        cli::Lemmadex::Index(i) => {
            let p = LemmaIndex::new(i.src, i.dst, i.stopwords, i.separator);
            p.run()?;
        }
        cli::Lemmadex::Invert(i) => {
            let p = GroupInvert::new(i.src, i.dst, i.groups, i.separator, i.probabilities);
            p.run()?;
        }
    };
    Ok(())
}
