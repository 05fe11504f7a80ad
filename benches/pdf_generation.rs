//! End-to-end page assembly benchmarks
//!
//! Renders both templates to in-memory PDF bytes; no file I/O is measured.

use criterion::{Criterion, criterion_group, criterion_main};
use furips::{DetailLine, DocumentAssembler, FieldMapping, TemplateId};
use std::hint::black_box;

fn claim() -> FieldMapping {
    let details = (0..20)
        .map(|i| DetailLine {
            tipo_servicio: "1".into(),
            codigo: format!("CUPS{:03}", i),
            descripcion: "Atención inicial de urgencias".into(),
            cantidad: "1".into(),
            valor_unitario: "45000".into(),
            valor_facturado: "45000".into(),
            valor_reclamado: "45000".into(),
        })
        .collect();
    [
        ("consecutivo", "000000000008"),
        ("factura", "123123"),
        ("razon_social", "HOSPITAL UNIVERSITARIO DEL VALLE EVARISTO GARCIA E.S.E."),
        ("codigo_habilitacion", "760010001"),
        ("victima_nombre", "Juan Perez"),
        ("victima_documento", "1234567890"),
        ("municipio", "Cali"),
        ("descripcion_evento", "Colisión entre motocicleta y vehículo particular en la intersección."),
    ]
    .into_iter()
    .collect::<FieldMapping>()
    .with_details(details)
}

fn bench_templates(c: &mut Criterion) {
    let assembler = DocumentAssembler::new();
    let data = claim();
    let mut group = c.benchmark_group("assemble");
    for template in TemplateId::ALL {
        group.bench_function(template.as_str(), |b| {
            b.iter(|| assembler.assemble(black_box(template), black_box(&data), None))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_templates);
criterion_main!(benches);
