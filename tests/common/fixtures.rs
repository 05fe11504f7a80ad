use furips::{DetailLine, FieldMapping};
use std::path::{Path, PathBuf};

/// The minimal claim used across generation tests.
pub fn sample_claim() -> FieldMapping {
    [
        ("consecutivo", "000000000008"),
        ("factura", "123123"),
        ("victima_nombre", "Juan Perez"),
        ("victima_documento", "1234567890"),
        ("codigo_habilitacion", "12AB3456"),
    ]
    .into_iter()
    .collect()
}

#[allow(dead_code)]
pub fn detail_lines(count: usize) -> Vec<DetailLine> {
    (0..count)
        .map(|i| DetailLine {
            tipo_servicio: "1".into(),
            codigo: format!("CUPS{:03}", i),
            descripcion: "Atención inicial de urgencias".into(),
            cantidad: "1".into(),
            valor_unitario: "45000".into(),
            valor_facturado: "45000".into(),
            valor_reclamado: "45000".into(),
        })
        .collect()
}

/// Writes a small solid PNG and returns its path.
#[allow(dead_code)]
pub fn write_header_png(dir: &Path) -> PathBuf {
    let path = dir.join("Encabezado_Furips.png");
    image::RgbImage::from_pixel(40, 8, image::Rgb([10, 60, 140]))
        .save(&path)
        .expect("write header png");
    path
}
