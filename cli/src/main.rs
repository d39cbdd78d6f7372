use anyhow::{Context, bail};
use clap::Parser;
use cli::{Args, Command};
use oxfilter::io::{ParserConfig, parse_ontology_with_config, serialize_ontology};
use oxfilter::{Filter, FilterOptions, Ontology, OntologyStore, PrefixMap};
use oxrdf::{NamedNode, Triple};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write, stdin, stdout};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

pub fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    init_tracing(matches.json_logs);
    match matches.command {
        Command::Filter {
            input,
            input_format,
            output,
            output_format,
            output_iri,
            prefix,
            entity,
            entities,
            select,
            axioms,
            trim,
            lenient,
        } => {
            let input_format = if let Some(format) = input_format {
                rdf_format_from_name(&format)?
            } else if let Some(file) = &input {
                rdf_format_from_path(file)?
            } else {
                bail!("The --input-format option must be set when reading from stdin")
            };
            let output_format = if let Some(format) = output_format {
                rdf_format_from_name(&format)?
            } else if let Some(file) = &output {
                rdf_format_from_path(file)?
            } else {
                bail!("The --output-format option must be set when writing to stdout")
            };
            let output_iri = output_iri
                .map(|iri| {
                    NamedNode::new(&iri)
                        .with_context(|| format!("The output ontology IRI {iri} is invalid"))
                })
                .transpose()?;
            let mut entity = entity;
            if let Some(file) = &entities {
                entity.extend(read_terms(file)?);
            }

            let config = if lenient {
                ParserConfig::default().lenient()
            } else {
                ParserConfig::default()
            };
            let (ontology, input_prefixes) = if let Some(file) = &input {
                load(
                    input_format,
                    File::open(file)
                        .with_context(|| format!("Failed to open {}", file.display()))?,
                    config,
                )?
            } else {
                load(input_format, stdin().lock(), config)?
            };

            let mut prefixes = PrefixMap::default();
            for (name, namespace) in input_prefixes {
                if let Err(e) = prefixes.add(name, namespace) {
                    warn!("Ignoring input prefix: {e}");
                }
            }
            for declaration in &prefix {
                prefixes.add_declaration(declaration)?;
            }

            let options = FilterOptions {
                entities: entity,
                select,
                axioms,
                trim,
            };
            let mut filtered = Filter::from_options(&options, &ontology, &prefixes)?.apply(&ontology);
            if output_iri.is_some() {
                filtered.set_iri(output_iri);
            }

            if let Some(file) = output {
                close_file_writer(save(
                    &filtered,
                    output_format,
                    &prefixes,
                    BufWriter::new(
                        File::create(&file)
                            .with_context(|| format!("Failed to create {}", file.display()))?,
                    ),
                )?)?;
            } else {
                save(&filtered, output_format, &prefixes, stdout().lock())?.flush()?;
            }
            Ok(())
        }
    }
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
}

/// Reads an ontology and the prefixes declared by its serialization.
fn load<R: Read>(
    format: RdfFormat,
    read: R,
    config: ParserConfig,
) -> anyhow::Result<(Ontology, Vec<(String, String)>)> {
    let mut parser = RdfParser::from_format(format).for_reader(read);
    let mut triples = Vec::new();
    for quad_result in &mut parser {
        match quad_result {
            Ok(quad) => triples.push(Triple::new(quad.subject, quad.predicate, quad.object)),
            Err(e) => {
                if config.lenient {
                    warn!("Parsing error: {e}");
                } else {
                    return Err(e.into());
                }
            }
        }
    }
    let prefixes = parser
        .prefixes()
        .map(|(name, namespace)| (name.to_owned(), namespace.to_owned()))
        .collect();
    let ontology = parse_ontology_with_config(triples, config)
        .context("The input is not a valid OWL 2 ontology")?;
    info!(
        axioms = ontology.len(),
        entities = ontology.entities().len(),
        "loaded ontology"
    );
    Ok((ontology, prefixes))
}

fn save<W: Write>(
    ontology: &Ontology,
    format: RdfFormat,
    prefixes: &PrefixMap,
    write: W,
) -> anyhow::Result<W> {
    let mut serializer = RdfSerializer::from_format(format);
    for (name, namespace) in prefixes.iter() {
        serializer = serializer
            .with_prefix(name, namespace)
            .with_context(|| format!("Invalid IRI for prefix {name}: {namespace}"))?;
    }
    let mut writer = serializer.for_writer(write);
    for triple in serialize_ontology(ontology) {
        writer.serialize_triple(&triple)?;
    }
    Ok(writer.finish()?)
}

/// Reads whitespace separated terms, skipping `#` comments.
fn read_terms(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read the entity file {}", path.display()))?;
    let mut terms = Vec::new();
    for line in content.lines() {
        for term in line.split_whitespace() {
            if term.starts_with('#') {
                break;
            }
            terms.push(term.to_owned());
        }
    }
    Ok(terms)
}

fn format_from_path<T>(
    path: &Path,
    from_extension: impl FnOnce(&str) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        from_extension(ext).map_err(|e| {
            e.context(format!(
                "Not able to guess the file format from file name extension '{ext}'"
            ))
        })
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_path(path: &Path) -> anyhow::Result<RdfFormat> {
    format_from_path(path, |ext| {
        RdfFormat::from_extension(ext)
            .with_context(|| format!("The file extension '{ext}' is unknown"))
    })
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic_in_result_fn)]

    use super::*;
    use anyhow::Result;
    use assert_fs::NamedTempFile;
    use assert_fs::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn formats_from_names_and_paths() -> Result<()> {
        assert_eq!(rdf_format_from_name("ttl")?, RdfFormat::Turtle);
        assert_eq!(rdf_format_from_name("application/n-triples")?, RdfFormat::NTriples);
        assert!(rdf_format_from_name("owl-functional").is_err());
        assert_eq!(rdf_format_from_path(&PathBuf::from("zoo.rdf"))?, RdfFormat::RdfXml);
        assert!(rdf_format_from_path(&PathBuf::from("zoo")).is_err());
        assert!(rdf_format_from_path(&PathBuf::from("zoo.obo")).is_err());
        Ok(())
    }

    #[test]
    fn terms_file_with_comments() -> Result<()> {
        let file = NamedTempFile::new("terms.txt")?;
        file.write_str(
            "# seeds\nex:Dog ex:Cat # pets\n\n<http://example.org/a#Rock>\n  obo:UBERON_0000001\n",
        )?;
        assert_eq!(
            read_terms(file.path())?,
            [
                "ex:Dog",
                "ex:Cat",
                "<http://example.org/a#Rock>",
                "obo:UBERON_0000001"
            ]
        );
        Ok(())
    }

    #[test]
    fn load_keeps_input_prefixes() -> Result<()> {
        let (ontology, prefixes) = load(
            RdfFormat::Turtle,
            "@prefix ex: <http://example.org/> .\n@prefix owl: <http://www.w3.org/2002/07/owl#> .\nex:A a owl:Class .".as_bytes(),
            ParserConfig::default(),
        )?;
        assert_eq!(ontology.len(), 1);
        assert!(prefixes.contains(&("ex".into(), "http://example.org/".into())));
        Ok(())
    }

    #[test]
    fn lenient_load_skips_invalid_statements() -> Result<()> {
        let data = "@prefix ex: <http://example.org/> .\n@prefix owl: <http://www.w3.org/2002/07/owl#> .\nex:A a owl:Class .\nex:B a .\nex:C a owl:Class .";
        assert!(load(RdfFormat::Turtle, data.as_bytes(), ParserConfig::default()).is_err());
        let (ontology, _) = load(
            RdfFormat::Turtle,
            data.as_bytes(),
            ParserConfig::default().lenient(),
        )?;
        assert!(!ontology.is_empty());
        Ok(())
    }
}
