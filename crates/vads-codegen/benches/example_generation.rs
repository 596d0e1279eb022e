//! Performance benchmarks for vads-docs-codegen.
//!
//! Measures analysis and example generation across component sizes
//! (1, 10, 50, 200 properties) plus the full extract-and-generate pass
//! over a declaration file.
//!
//! Run with: cargo bench --package vads-docs-codegen

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use vads_docs_codegen::{ExampleGenerator, SemanticAnalyzer};
use vads_docs_core::{
    ComponentData, ComponentStatus, GenerateOptions, MaturityCategory, MaturityLevel,
    ParserConfig, Property,
};
use vads_docs_metadata::MetadataExtractor;

// ============================================================================
// Test Data Generators
// ============================================================================

const PROPERTY_SHAPES: &[(&str, &str)] = &[
    ("label", "string"),
    ("hint", "string"),
    ("disabled", "boolean"),
    ("status", "'info' | 'warning' | 'error'"),
    ("aria-describedby", "string"),
    ("headlineLevel", "number"),
    ("options", "string[]"),
    ("onVaChange", "(e: CustomEvent) => void"),
];

fn create_component(tag: &str, property_count: usize) -> ComponentData {
    let properties = (0..property_count)
        .map(|i| {
            let (name, type_text) = PROPERTY_SHAPES[i % PROPERTY_SHAPES.len()];
            let name = if i < PROPERTY_SHAPES.len() {
                name.to_string()
            } else {
                format!("{name}{i}")
            };
            Property::new(name, type_text, i % 3 == 0)
        })
        .collect();

    ComponentData {
        name: tag.trim_start_matches("va-").to_string(),
        tag_name: tag.to_string(),
        status: ComponentStatus::Stable,
        maturity_category: MaturityCategory::Use,
        maturity_level: MaturityLevel::Deployed,
        recommendation: String::new(),
        guidance_href: None,
        translations: vec![],
        properties,
    }
}

fn create_declaration_file(component_count: usize) -> String {
    (0..component_count)
        .map(|i| {
            format!(
                "/**\n * @componentName Widget {i}\n * @maturityCategory use\n * @maturityLevel deployed\n */\n\
                 interface VaWidget{i} {{\n  \"label\": string;\n  \"disabled\"?: boolean;\n  \"name\": string;\n}}\n"
            )
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_analysis(c: &mut Criterion) {
    let analyzer = SemanticAnalyzer::default();
    let mut group = c.benchmark_group("semantic_analysis");

    for count in [1_usize, 10, 50, 200] {
        let component = create_component("va-text-input", count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &component, |b, component| {
            b.iter(|| analyzer.analyze(black_box(&component.properties)));
        });
    }
    group.finish();
}

fn bench_example_generation(c: &mut Criterion) {
    let generator = ExampleGenerator::default();
    let options = GenerateOptions::default();
    let mut group = c.benchmark_group("example_generation");

    for count in [1_usize, 10, 50, 200] {
        let component = create_component("va-text-input", count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &component, |b, component| {
            b.iter(|| generator.generate_examples(black_box(component), &options));
        });
    }

    let composite = create_component("va-radio-group", 8);
    group.bench_function("composite", |b| {
        b.iter(|| generator.generate_examples(black_box(&composite), &options));
    });
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let extractor = MetadataExtractor::new(&ParserConfig::default()).unwrap();
    let generator = ExampleGenerator::default();
    let options = GenerateOptions::default();
    let mut group = c.benchmark_group("full_pipeline");

    for count in [10_usize, 100] {
        let text = create_declaration_file(count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| {
                let registry = extractor.extract_components(black_box(text));
                registry
                    .iter()
                    .map(|component| generator.generate_examples(component, &options).len())
                    .sum::<usize>()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_analysis,
    bench_example_generation,
    bench_full_pipeline
);
criterion_main!(benches);
