//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lemmadex", about = "profession-keyed lemma index tool.")]
/// Holds every job that is callable by the `lemmadex` command.
pub enum Lemmadex {
    #[structopt(about = "Keep only allow-listed articles of a dump")]
    Filter(Filter),
    #[structopt(about = "Build per-article lemma frequency vectors")]
    Index(Index),
    #[structopt(about = "Invert per-article vectors into per-group indices")]
    Invert(Invert),
}

#[derive(Debug, StructOpt)]
/// Filter job parameters.
pub struct Filter {
    #[structopt(parse(from_os_str), help = "source dump location (contains part-*)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "filtered dump destination")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "allowlist",
        help = "newline-delimited article identifiers to keep",
        default_value = "people.txt"
    )]
    pub allowlist: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Index job parameters.
pub struct Index {
    #[structopt(parse(from_os_str), help = "filtered dump location (contains part-*)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "lemma index destination")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "stopwords",
        help = "newline-delimited stop words",
        default_value = "stopwords.txt"
    )]
    pub stopwords: PathBuf,
    #[structopt(
        long = "separator",
        help = "separator between identifier and vector in output lines",
        default_value = " : "
    )]
    pub separator: String,
}

#[derive(Debug, StructOpt)]
/// Invert job parameters.
pub struct Invert {
    #[structopt(parse(from_os_str), help = "lemma index location (contains part-*)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "group index destination")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "groups",
        help = "identifier;group1,group2 membership records",
        default_value = "professions.txt"
    )]
    pub groups: PathBuf,
    #[structopt(
        long = "separator",
        help = "separator between key and vector, on input and output lines",
        default_value = " : "
    )]
    pub separator: String,
    #[structopt(
        long = "probabilities",
        help = "write relative frequencies instead of raw counts"
    )]
    pub probabilities: bool,
}
