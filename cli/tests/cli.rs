#![allow(clippy::panic_in_result_fn)]

use anyhow::Result;
use assert_cmd::Command;
use assert_fs::NamedTempFile;
use assert_fs::prelude::*;
use predicates::prelude::*;

const ZOO: &str = "@prefix ex: <http://example.org/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
ex:Animal a owl:Class .
ex:Dog a owl:Class ; rdfs:subClassOf ex:Animal ; rdfs:label \"dog\" .
ex:Cat a owl:Class ; rdfs:subClassOf ex:Animal .
ex:Rock a owl:Class ; rdfs:label \"rock\" .
";

fn cli_command() -> Result<Command> {
    Ok(Command::cargo_bin("oxfilter")?)
}

fn filter_command() -> Result<Command> {
    let mut command = cli_command()?;
    command
        .arg("filter")
        .arg("--input-format")
        .arg("ttl")
        .arg("--output-format")
        .arg("nt")
        .write_stdin(ZOO);
    Ok(command)
}

#[test]
fn cli_help() -> Result<()> {
    cli_command()?
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_filter_help() -> Result<()> {
    cli_command()?
        .arg("filter")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--select"));
    Ok(())
}

#[test]
fn cli_filter_identity() -> Result<()> {
    filter_command()?
        .assert()
        .success()
        .stdout(predicate::str::contains("<http://example.org/Rock>"))
        .stdout(predicate::str::contains(
            "<http://example.org/Dog> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://example.org/Animal> .",
        ));
    Ok(())
}

#[test]
fn cli_filter_descendants() -> Result<()> {
    filter_command()?
        .arg("--entity")
        .arg("ex:Animal")
        .arg("--select")
        .arg("descendants named")
        .arg("--axioms")
        .arg("SubClassOf")
        .assert()
        .success()
        .stdout(predicate::str::contains("<http://example.org/Cat>"))
        .stdout(predicate::str::contains("\"dog\"").not())
        .stdout(predicate::str::contains("<http://example.org/Rock>").not());
    Ok(())
}

#[test]
fn cli_filter_annotation() -> Result<()> {
    filter_command()?
        .arg("-s")
        .arg("rdfs:label='rock'")
        .arg("-a")
        .arg("AnnotationAssertion")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rock\""))
        .stdout(predicate::str::contains("\"dog\"").not());
    Ok(())
}

#[test]
fn cli_filter_without_trim_keeps_declarations() -> Result<()> {
    filter_command()?
        .arg("-e")
        .arg("ex:Dog")
        .arg("-a")
        .arg("SubClassOf")
        .arg("--trim")
        .arg("false")
        .assert()
        .success()
        .stdout(predicate::str::contains("<http://example.org/Rock>"));
    Ok(())
}

#[test]
fn cli_filter_entities_file_and_output_file() -> Result<()> {
    let terms = NamedTempFile::new("terms.txt")?;
    terms.write_str("# seeds\nex:Cat # the cat\n")?;
    let input = NamedTempFile::new("zoo.ttl")?;
    input.write_str(ZOO)?;
    let output = NamedTempFile::new("out.nt")?;
    cli_command()?
        .arg("filter")
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .arg("--entities")
        .arg(terms.path())
        .arg("--prefix")
        .arg("zoo: http://example.org/")
        .arg("--output-iri")
        .arg("http://example.org/cats")
        .arg("--axioms")
        .arg("t_box")
        .assert()
        .success();
    output.assert(predicate::str::contains(
        "<http://example.org/cats> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Ontology> .",
    ));
    output.assert(predicate::str::contains(
        "<http://example.org/Cat> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://example.org/Animal> .",
    ));
    output.assert(predicate::str::contains("<http://example.org/Dog>").not());
    Ok(())
}

#[test]
fn cli_filter_invalid_axiom_type() -> Result<()> {
    let output = NamedTempFile::new("out.ttl")?;
    cli_command()?
        .arg("filter")
        .arg("--input-format")
        .arg("ttl")
        .arg("--output")
        .arg(output.path())
        .arg("--axioms")
        .arg("frobnicate")
        .write_stdin(ZOO)
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate is not a valid axiom type"));
    output.assert(predicate::path::missing());
    Ok(())
}

#[test]
fn cli_filter_pattern_is_unimplemented() -> Result<()> {
    filter_command()?
        .arg("--select")
        .arg("rdfs:label=~'d.*'")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("pattern is not implemented"));
    Ok(())
}

#[test]
fn cli_filter_unknown_entity() -> Result<()> {
    filter_command()?
        .arg("--entity")
        .arg("ex:Unicorn")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ex:Unicorn"));
    Ok(())
}

#[test]
fn cli_filter_stdout_requires_format() -> Result<()> {
    cli_command()?
        .arg("filter")
        .arg("--input-format")
        .arg("ttl")
        .write_stdin(ZOO)
        .assert()
        .failure();
    Ok(())
}

#[test]
fn cli_filter_json_logs() -> Result<()> {
    filter_command()?
        .arg("--json-logs")
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
    Ok(())
}
