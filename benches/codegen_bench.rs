//! Code generation benchmark
//!
//! Measures rendering throughput (output bytes/sec) in each mode over
//! synthetic programs of increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use esgen::ast::{
    BinaryOperator, Binding, BindingIdentifier, Expression, FormalParameters, FunctionBody,
    FunctionDeclaration, ObjectProperty, Parameter, Program, Script, Statement,
    VariableDeclarationKind,
};
use esgen::{compact, pretty, web_safe};

// =============================================================================
// Test Programs
// =============================================================================

fn function(index: usize, statements: usize) -> Statement {
    let mut body = Vec::with_capacity(statements + 1);
    for i in 0..statements {
        body.push(Statement::declare(
            VariableDeclarationKind::Let,
            format!("v{i}"),
            Some(Expression::binary(
                Expression::identifier("a"),
                BinaryOperator::Plus,
                Expression::call(
                    Expression::member(Expression::identifier("console"), "log"),
                    vec![
                        Expression::string(format!("</script> café {i}")),
                        Expression::template(&["x", "y"], vec![Expression::identifier("b")]),
                    ],
                ),
            )),
        ));
    }
    body.push(Statement::ret(Some(Expression::object(vec![
        ObjectProperty::data("value", Expression::number(index as f64 * 1000.0)),
        ObjectProperty::data("pattern", Expression::regexp("^<script", "i")),
    ]))));

    Statement::FunctionDeclaration(FunctionDeclaration {
        is_async: false,
        is_generator: false,
        name: BindingIdentifier {
            name: format!("f{index}"),
        },
        params: FormalParameters {
            items: vec![
                Parameter::Binding(Binding::identifier("a")),
                Parameter::Binding(Binding::identifier("b")),
            ],
            rest: None,
        },
        body: FunctionBody {
            directives: Vec::new(),
            statements: body,
        },
    })
}

fn generate_program(functions: usize, statements: usize) -> Program {
    Program::Script(Script::new(
        (0..functions).map(|i| function(i, statements)).collect(),
    ))
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_modes(c: &mut Criterion) {
    let program = generate_program(20, 10);
    let mut group = c.benchmark_group("codegen_modes");
    group.bench_function("pretty", |b| b.iter(|| black_box(pretty(black_box(&program)))));
    group.bench_function("compact", |b| b.iter(|| black_box(compact(black_box(&program)))));
    group.bench_function("web_safe", |b| b.iter(|| black_box(web_safe(black_box(&program)))));
    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("codegen_throughput");
    for (functions, statements) in [(10, 5), (50, 5), (100, 10)] {
        let program = generate_program(functions, statements);
        let label = format!("{functions}fn_{statements}stmt");
        group.throughput(Throughput::Bytes(pretty(&program).len() as u64));
        group.bench_with_input(BenchmarkId::new("pretty", &label), &program, |b, program| {
            b.iter(|| black_box(pretty(program)))
        });

        group.throughput(Throughput::Bytes(web_safe(&program).len() as u64));
        group.bench_with_input(BenchmarkId::new("web_safe", &label), &program, |b, program| {
            b.iter(|| black_box(web_safe(program)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_modes, bench_throughput);
criterion_main!(benches);
