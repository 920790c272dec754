//! Lookup result model.

use serde::{Deserialize, Serialize};

/// Taxpayer record returned by a RUC or DNI lookup.
///
/// Keyed by `ruc`; every other field may be absent. Field names on the wire
/// follow the registry's Spanish column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub ruc: String,
    #[serde(default, rename = "nombre_razon_social")]
    pub business_name: Option<String>,
    #[serde(default, rename = "estado_contribuyente")]
    pub taxpayer_status: Option<String>,
    #[serde(default, rename = "condicion_domicilio")]
    pub domicile_condition: Option<String>,
    #[serde(default)]
    pub ubigeo: Option<String>,
    #[serde(default, rename = "tipo_via")]
    pub street_type: Option<String>,
    #[serde(default, rename = "nombre_via")]
    pub street_name: Option<String>,
    #[serde(default, rename = "codigo_zona")]
    pub zone_code: Option<String>,
    #[serde(default, rename = "tipo_zona")]
    pub zone_type: Option<String>,
    #[serde(default, rename = "numero")]
    pub number: Option<String>,
    #[serde(default)]
    pub interior: Option<String>,
    #[serde(default, rename = "lote")]
    pub lot: Option<String>,
    #[serde(default, rename = "departamento")]
    pub department: Option<String>,
    #[serde(default, rename = "manzana")]
    pub block: Option<String>,
    #[serde(default, rename = "kilometro")]
    pub kilometer: Option<String>,
    #[serde(default)]
    pub extra: Option<String>,
}

impl LookupResult {
    /// Labelled fields in display order, absent values included as `None`.
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("RUC", Some(self.ruc.as_str())),
            ("Business name", self.business_name.as_deref()),
            ("Taxpayer status", self.taxpayer_status.as_deref()),
            ("Domicile condition", self.domicile_condition.as_deref()),
            ("Ubigeo", self.ubigeo.as_deref()),
            ("Department", self.department.as_deref()),
            ("Street type", self.street_type.as_deref()),
            ("Street name", self.street_name.as_deref()),
            ("Number", self.number.as_deref()),
            ("Interior", self.interior.as_deref()),
            ("Zone code", self.zone_code.as_deref()),
            ("Zone type", self.zone_type.as_deref()),
            ("Lot", self.lot.as_deref()),
            ("Block", self.block.as_deref()),
            ("Kilometer", self.kilometer.as_deref()),
            ("Extra", self.extra.as_deref()),
        ]
    }
}
