//! FURIPS 2: the itemised relation of billed services.

use super::furips1::{CODIGO_HABILITACION, CONSECUTIVO, FACTURA, RAZON_SOCIAL};
use super::pass::{DrawPass, RowEntry, TableColumn};
use furips_render_core::CanvasRenderer;
use furips_types::Alignment;
use std::path::Path;

const COLUMNS: &[TableColumn] = &[
    TableColumn {
        title: "Tipo de servicio",
        weight: 1.2,
        alignment: Alignment::Center,
        value: |d| d.tipo_servicio.as_str(),
    },
    TableColumn {
        title: "Código",
        weight: 1.0,
        alignment: Alignment::Center,
        value: |d| d.codigo.as_str(),
    },
    TableColumn {
        title: "Descripción",
        weight: 3.2,
        alignment: Alignment::Left,
        value: |d| d.descripcion.as_str(),
    },
    TableColumn {
        title: "Cantidad",
        weight: 0.8,
        alignment: Alignment::Center,
        value: |d| d.cantidad.as_str(),
    },
    TableColumn {
        title: "Valor unitario",
        weight: 1.2,
        alignment: Alignment::Center,
        value: |d| d.valor_unitario.as_str(),
    },
    TableColumn {
        title: "Valor total facturado",
        weight: 1.3,
        alignment: Alignment::Center,
        value: |d| d.valor_facturado.as_str(),
    },
    TableColumn {
        title: "Valor total reclamado",
        weight: 1.3,
        alignment: Alignment::Center,
        value: |d| d.valor_reclamado.as_str(),
    },
];

pub(super) fn draw<C: CanvasRenderer>(pass: &mut DrawPass<'_, C>, header_image: Option<&Path>) {
    pass.header(header_image);
    pass.title("FURIPS 2 - RELACIÓN DE GASTOS DE TRANSPORTE Y MOVILIZACIÓN DE VÍCTIMAS Y SERVICIOS PRESTADOS");
    pass.field_row(&[
        RowEntry::new("No. Consecutivo", CONSECUTIVO).min_width(80.0),
        RowEntry::new("No. Factura", FACTURA).min_width(80.0),
        RowEntry::new("Prestador", RAZON_SOCIAL).min_width(180.0),
    ]);
    pass.code_grid_row("Código de habilitación", CODIGO_HABILITACION);

    pass.section("DETALLE DE LOS SERVICIOS RECLAMADOS");
    let details = pass.data().details();
    pass.detail_table(COLUMNS, details);
}
