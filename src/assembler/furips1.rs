//! FURIPS 1: the claim form for a traffic-accident victim.

use super::pass::{DrawPass, RowEntry};
use crate::resolve::FieldSpec;
use furips_render_core::CanvasRenderer;
use std::path::Path;

pub(crate) const CONSECUTIVO: FieldSpec =
    FieldSpec::new("consecutivo", &["numero_consecutivo", "numero_rad_siras", "idAccidente"]);
pub(crate) const FACTURA: FieldSpec = FieldSpec::new("factura", &["numero_factura"]);
const RAD_SIRAS: FieldSpec = FieldSpec::new("rad_siras", &["numero_rad_siras", "radicado_siras"]);

pub(crate) const RAZON_SOCIAL: FieldSpec = FieldSpec::new("razon_social", &["prestador", "nombre_prestador"]);
pub(crate) const CODIGO_HABILITACION: FieldSpec =
    FieldSpec::new("codigo_habilitacion", &["codigoHabilitacion", "cod_habilitacion"]);

const VICTIMA_NOMBRE: FieldSpec = FieldSpec::new("victima_nombre", &["nombre_victima", "nombreVictima"]);
const VICTIMA_DOCUMENTO: FieldSpec =
    FieldSpec::new("victima_documento", &["documento_victima", "identificacionVictima"]);

const FECHA_EVENTO: FieldSpec = FieldSpec::new("fecha_evento", &["fechaEvento", "fecha_accidente"]);
const HORA_EVENTO: FieldSpec = FieldSpec::new("hora_evento", &["horaEvento", "hora_accidente"]);
const MUNICIPIO: FieldSpec = FieldSpec::new("municipio", &["minicipioEvento", "municipioEvento", "municipio_evento"]);
const ZONA: FieldSpec = FieldSpec::new("zona", &["zona_evento", "zonaEvento"]);
const DIRECCION: FieldSpec = FieldSpec::new("direccion", &["direccion_evento", "direccionEvento"]);

const PLACA: FieldSpec = FieldSpec::new("placa", &["placa_vehiculo", "placaVehiculo"]);
const CONDUCTOR_NOMBRE: FieldSpec = FieldSpec::new("conductor_nombre", &["nombre_conductor"]);
const CONDUCTOR_DOCUMENTO: FieldSpec = FieldSpec::new("conductor_documento", &["documento_conductor"]);
const PROPIETARIO_TELEFONO: FieldSpec = FieldSpec::new("propietario_telefono", &["telefono_propietario"]);
const PROPIETARIO_MUNICIPIO: FieldSpec = FieldSpec::new("propietario_municipio", &["municipio_propietario"]);

const REMISION_TIPO: FieldSpec = FieldSpec::new("remision_tipo", &["tipo_remision"]);
const REMISION_FECHA: FieldSpec = FieldSpec::new("remision_fecha", &["fecha_remision"]);
const REMISION_HORA: FieldSpec = FieldSpec::new("remision_hora_salida", &["hora_salida"]);
const IPS_RECIBE: FieldSpec = FieldSpec::new("ips_recibe", &["prestador_recibe"]);
const CODIGO_HAB_RECIBE: FieldSpec = FieldSpec::new("codigo_hab_recibe", &["codigo_habilitacion_recibe"]);
const PROFESIONAL_RECIBE: FieldSpec = FieldSpec::new("profesional_recibe", &[]);
const CARGO_RECIBE: FieldSpec = FieldSpec::new("cargo_recibe", &[]);
const PLACA_AMBULANCIA: FieldSpec = FieldSpec::new("placa_ambulancia", &["placaAmbulancia"]);

const MEDICO_NOMBRE: FieldSpec = FieldSpec::new("medico_nombre", &["nombre_medico"]);
const MEDICO_IDENTIFICACION: FieldSpec = FieldSpec::new("medico_identificacion", &["documento_medico"]);
const MEDICO_REGISTRO: FieldSpec = FieldSpec::new("medico_registro", &["registro_medico"]);

const GMQ_FACTURADO: FieldSpec = FieldSpec::new("total_gmq_facturado", &["totalGmqFacturado"]);
const GMQ_RECLAMADO: FieldSpec = FieldSpec::new("total_gmq_reclamado", &["totalGmqReclamado"]);
const TRANSPORTE_FACTURADO: FieldSpec =
    FieldSpec::new("total_transporte_facturado", &["totalTransporteFacturado"]);
const TRANSPORTE_RECLAMADO: FieldSpec =
    FieldSpec::new("total_transporte_reclamado", &["totalTransporteReclamado"]);

const DESCRIPCION_EVENTO: FieldSpec =
    FieldSpec::new("descripcion_evento", &["descripcionEvento", "relato"]);

const ZONA_OPTIONS: &[(&str, &str)] = &[("U", "Urbana"), ("R", "Rural")];

pub(super) fn draw<C: CanvasRenderer>(pass: &mut DrawPass<'_, C>, header_image: Option<&Path>) {
    pass.header(header_image);
    pass.title("FORMULARIO ÚNICO DE RECLAMACIÓN DE LAS INSTITUCIONES PRESTADORAS DE SERVICIOS DE SALUD - FURIPS");
    pass.field_row(&[
        RowEntry::new("No. Consecutivo", CONSECUTIVO).min_width(80.0),
        RowEntry::new("No. Factura", FACTURA).min_width(80.0),
        RowEntry::new("No. Radicado SIRAS", RAD_SIRAS).min_width(80.0),
    ]);

    pass.section("I. DATOS DE LA INSTITUCIÓN PRESTADORA DE SERVICIOS DE SALUD");
    let row_height = pass.layout().row_height;
    pass.full_width_row("Razón social", RAZON_SOCIAL, row_height);
    pass.code_grid_row("Código de habilitación", CODIGO_HABILITACION);

    pass.section("II. DATOS DE LA VÍCTIMA DEL EVENTO");
    pass.field_row(&[
        RowEntry::new("Nombre completo", VICTIMA_NOMBRE).min_width(180.0),
        RowEntry::new("Documento", VICTIMA_DOCUMENTO).min_width(90.0),
    ]);

    pass.section("III. DATOS DEL SITIO DONDE OCURRIÓ EL EVENTO");
    pass.field_row(&[
        RowEntry::new("Fecha", FECHA_EVENTO).min_width(60.0),
        RowEntry::new("Hora", HORA_EVENTO),
        RowEntry::new("Municipio", MUNICIPIO).min_width(120.0),
    ]);
    pass.option_row("Zona", ZONA, ZONA_OPTIONS);
    pass.full_width_row("Dirección", DIRECCION, row_height);

    pass.section("IV. DATOS DEL VEHÍCULO Y DEL CONDUCTOR");
    pass.field_row(&[
        RowEntry::new("Placa", PLACA).min_width(50.0),
        RowEntry::new("Conductor", CONDUCTOR_NOMBRE).min_width(150.0),
        RowEntry::new("Documento", CONDUCTOR_DOCUMENTO).min_width(80.0),
    ]);
    pass.field_row(&[
        RowEntry::new("Teléfono propietario", PROPIETARIO_TELEFONO).min_width(80.0),
        RowEntry::new("Municipio propietario", PROPIETARIO_MUNICIPIO).min_width(120.0),
    ]);

    pass.section("V. DATOS DE REMISIÓN");
    pass.field_row(&[
        RowEntry::new("Tipo", REMISION_TIPO),
        RowEntry::new("Fecha", REMISION_FECHA).min_width(60.0),
        RowEntry::new("Hora salida", REMISION_HORA),
        RowEntry::new("Placa ambulancia", PLACA_AMBULANCIA).min_width(50.0),
    ]);
    pass.field_row(&[
        RowEntry::new("IPS que recibe", IPS_RECIBE).min_width(150.0),
        RowEntry::new("Código", CODIGO_HAB_RECIBE).min_width(80.0),
    ]);
    pass.field_row(&[
        RowEntry::new("Profesional que recibe", PROFESIONAL_RECIBE).min_width(150.0),
        RowEntry::new("Cargo", CARGO_RECIBE).min_width(80.0),
    ]);

    pass.section("VI. DATOS DEL MÉDICO TRATANTE");
    pass.field_row(&[
        RowEntry::new("Nombre", MEDICO_NOMBRE).min_width(150.0),
        RowEntry::new("Identificación", MEDICO_IDENTIFICACION).min_width(80.0),
        RowEntry::new("Registro médico", MEDICO_REGISTRO).min_width(60.0),
    ]);

    pass.section("VII. AMPAROS DE RECLAMACIÓN");
    pass.field_row(&[
        RowEntry::new("Gastos médico quirúrgicos facturado", GMQ_FACTURADO).min_width(70.0),
        RowEntry::new("Reclamado", GMQ_RECLAMADO).min_width(70.0),
    ]);
    pass.field_row(&[
        RowEntry::new("Transporte y movilización facturado", TRANSPORTE_FACTURADO).min_width(70.0),
        RowEntry::new("Reclamado", TRANSPORTE_RECLAMADO).min_width(70.0),
    ]);

    let block_height = pass.layout().text_block_height;
    pass.full_width_row("Descripción del evento", DESCRIPCION_EVENTO, block_height);
}
