use clap::{ArgAction, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "oxfilter")]
/// OxFilter command line toolkit to select axioms of OWL ontologies
pub struct Args {
    /// Write logs as JSON lines on stderr
    ///
    /// The log level is set with the RUST_LOG environment variable and defaults to "warn".
    #[arg(long, global = true)]
    pub json_logs: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Keep the axioms of an ontology selected by a chain of select clauses
    ///
    /// Each clause expands the seed entities through relations or annotation matches
    /// and keeps the axioms referencing the expanded set.
    /// The output of a clause is the input of the next one.
    Filter {
        /// File to read the ontology from
        ///
        /// If no file is given, stdin is used.
        /// In this case, the content format must be specified using the --input-format option.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        input: Option<PathBuf>,
        /// The format of the input file
        ///
        /// It can be an extension like "ttl" or a MIME type like "text/turtle".
        ///
        /// By default, the format is guessed from the input file extension.
        #[arg(long, required_unless_present = "input")]
        input_format: Option<String>,
        /// File to write the filtered ontology to
        ///
        /// If no file is given, stdout is used.
        /// In this case, the output format must be specified using the --output-format option.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// The format of the output file
        ///
        /// It can be an extension like "ttl" or a MIME type like "text/turtle".
        ///
        /// By default, the format is guessed from the output file extension.
        #[arg(long, required_unless_present = "output")]
        output_format: Option<String>,
        /// IRI of the filtered ontology
        ///
        /// By default, the input ontology IRI is kept.
        #[arg(short = 'O', long, value_hint = ValueHint::Url)]
        output_iri: Option<String>,
        /// Additional prefix, written "prefix: namespace"
        ///
        /// Prefixes are used to expand the CURIEs given to the other options and to write the output.
        #[arg(short, long = "prefix")]
        prefix: Vec<String>,
        /// Seed entity, as a CURIE or an IRI
        ///
        /// By default, every entity of the input ontology is a seed.
        #[arg(short, long)]
        entity: Vec<String>,
        /// File listing seed entities
        ///
        /// Entities are separated by whitespace and "#" starts a comment.
        #[arg(short = 'E', long, value_hint = ValueHint::FilePath)]
        entities: Option<PathBuf>,
        /// Select clause, applied in the given order
        ///
        /// A clause is either a whitespace separated list of relations
        /// (self, parents, children, ancestors, descendants, equivalents, disjoints, types, instances)
        /// and flags (named, anonymous, complement),
        /// or a single annotation match like "rdfs:label='dog'".
        ///
        /// By default, the "self" clause is used.
        #[arg(short, long)]
        select: Vec<String>,
        /// Axiom types to keep, joined with "+"
        ///
        /// A type is an OWL axiom name like "SubClassOf", a group ("a_box", "t_box", "r_box") or "all".
        ///
        /// By default, all axiom types are kept.
        #[arg(short, long)]
        axioms: Vec<String>,
        /// Remove the entities no remaining axiom references
        #[arg(short, long, default_value_t = true, action = ArgAction::Set)]
        trim: bool,
        /// Attempt to keep going even if the input file is invalid
        ///
        /// Invalid RDF statements and triples that do not map to OWL axioms are skipped.
        #[arg(long)]
        lenient: bool,
    },
}
