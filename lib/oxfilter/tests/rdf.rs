//! Loading, filtering and saving ontologies through RDF syntaxes.

use oxfilter::io::{parse_ontology, serialize_ontology};
use oxfilter::{
    Annotation, Axiom, Entity, Filter, FilterOptions, Ontology, OntologyStore, ParseErrorKind,
    PrefixMap,
};
use oxrdf::{Literal, NamedNode, Triple};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use rustc_hash::FxHashSet;

const ZOO: &str = r#"
@prefix : <http://example.org/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

:zoo a owl:Ontology ; rdfs:comment "A tiny zoo" .

:Animal a owl:Class .
:Dog a owl:Class ; rdfs:subClassOf :Animal ; rdfs:label "dog" .
:Cat a owl:Class ; rdfs:subClassOf :Animal ; owl:disjointWith :Dog .
:Rock a owl:Class ; rdfs:label "rock" .
:Pet a owl:Class ; owl:equivalentClass [
    a owl:Restriction ; owl:onProperty :livesWith ; owl:someValuesFrom :Person
] .
:Person a owl:Class .
:livesWith a owl:ObjectProperty .
:chases a owl:ObjectProperty .
:rex a :Dog ; :chases :tom .
"#;

fn triples(data: &[u8], format: RdfFormat) -> Vec<Triple> {
    RdfParser::from_format(format)
        .for_reader(data)
        .map(|quad| {
            let quad = quad.unwrap();
            Triple::new(quad.subject, quad.predicate, quad.object)
        })
        .collect()
}

fn load(turtle: &str) -> Ontology {
    parse_ontology(triples(turtle.as_bytes(), RdfFormat::Turtle)).unwrap()
}

fn save(ontology: &Ontology, format: RdfFormat) -> Vec<u8> {
    let mut serializer = RdfSerializer::from_format(format)
        .with_prefix("ex", "http://example.org/")
        .unwrap()
        .for_writer(Vec::new());
    for triple in serialize_ontology(ontology) {
        serializer.serialize_triple(&triple).unwrap();
    }
    serializer.finish().unwrap()
}

fn iri(local: &str) -> NamedNode {
    NamedNode::new(format!("http://example.org/{local}")).unwrap()
}

fn axiom_set(ontology: &Ontology) -> FxHashSet<Axiom> {
    ontology.axioms().iter().cloned().collect()
}

fn run(ontology: &Ontology, entities: &[&str], select: &[&str], axioms: &[&str]) -> Ontology {
    let mut prefixes = PrefixMap::default();
    prefixes.add("ex", "http://example.org/").unwrap();
    let options = FilterOptions {
        entities: entities.iter().map(|s| (*s).into()).collect(),
        select: select.iter().map(|s| (*s).into()).collect(),
        axioms: axioms.iter().map(|s| (*s).into()).collect(),
        ..FilterOptions::default()
    };
    Filter::from_options(&options, ontology, &prefixes)
        .unwrap()
        .apply(ontology)
}

#[test]
fn test_load_zoo() {
    let ontology = load(ZOO);
    assert_eq!(ontology.iri(), Some(&iri("zoo")));
    assert_eq!(ontology.annotations().len(), 1);
    assert!(ontology.contains_axiom(&Axiom::subclass_of(iri("Dog"), iri("Animal"))));
    assert!(ontology.contains_axiom(&Axiom::class_assertion(iri("Dog"), iri("rex"))));
    assert!(ontology.contains_axiom(&Axiom::object_property_assertion(
        iri("chases"),
        iri("rex"),
        iri("tom")
    )));
    assert!(ontology.contains_axiom(&Axiom::annotation_assertion(
        iri("Rock"),
        Annotation::new(
            NamedNode::new("http://www.w3.org/2000/01/rdf-schema#label").unwrap(),
            Literal::new_simple_literal("rock")
        )
    )));
}

#[test]
fn test_round_trip_through_turtle() {
    let ontology = load(ZOO);
    for format in [RdfFormat::Turtle, RdfFormat::NTriples, RdfFormat::RdfXml] {
        let reloaded = parse_ontology(triples(&save(&ontology, format), format)).unwrap();
        assert_eq!(axiom_set(&reloaded), axiom_set(&ontology), "{format}");
        assert_eq!(reloaded.iri(), ontology.iri());
        assert_eq!(reloaded.annotations(), ontology.annotations());
    }
}

#[test]
fn test_filtered_output_round_trips() {
    let ontology = load(ZOO);
    let filtered = run(&ontology, &["ex:Animal"], &["self descendants"], &[]);
    assert!(filtered.contains_axiom(&Axiom::class_assertion(iri("Dog"), iri("rex"))));
    assert!(!filtered.contains_axiom(&Axiom::declaration(Entity::Class(iri("Rock")))));
    assert!(!filtered.contains_entity(&Entity::Class(iri("Rock"))));
    assert!(!filtered.contains_entity(&Entity::ObjectProperty(iri("chases"))));

    let reloaded = parse_ontology(triples(
        &save(&filtered, RdfFormat::Turtle),
        RdfFormat::Turtle,
    ))
    .unwrap();
    assert_eq!(axiom_set(&reloaded), axiom_set(&filtered));
    assert_eq!(reloaded.entities(), filtered.entities());
}

#[test]
fn test_anonymous_selection_from_rdf() {
    let ontology = load(ZOO);
    let filtered = run(&ontology, &["ex:Pet"], &["anonymous"], &[]);
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered.axioms()[0].axiom_type(),
        oxfilter::AxiomType::EquivalentClasses
    );
    let output = String::from_utf8(save(&filtered, RdfFormat::NTriples)).unwrap();
    assert!(output.contains("<http://www.w3.org/2002/07/owl#someValuesFrom>"));
    assert!(!output.contains("http://example.org/Rock"));
}

#[test]
fn test_malformed_list_is_rejected() {
    let turtle = r#"
        @prefix : <http://example.org/> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        :A owl:disjointUnionOf _:list .
        _:list rdf:first :B .
    "#;
    let error = parse_ontology(triples(turtle.as_bytes(), RdfFormat::Turtle)).unwrap_err();
    assert_eq!(error.kind(), ParseErrorKind::MalformedList);
}
