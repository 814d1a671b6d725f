//! Request payloads for the detail write path
//!
//! The mobile form sends numbers as strings (and sometimes the reverse), so
//! the scalar fields are decoded leniently. Presence is checked with
//! `validator` after blanks have been normalized to `None`.

use serde::{de, Deserialize, Deserializer};
use validator::Validate;

use crate::db::{NewProduct, NewSupplier};
use crate::errors::{AppError, Result};

/// Body of `POST /api/detalle-producto`
#[derive(Debug, Default, Deserialize)]
pub struct CreateDetailRequest {
    #[serde(default)]
    pub producto: Option<ProductInput>,

    #[serde(default)]
    pub proveedor: Option<SupplierInput>,
}

impl CreateDetailRequest {
    /// Both sub-objects must be present
    pub fn into_parts(self) -> Result<(ProductInput, SupplierInput)> {
        match (self.producto, self.proveedor) {
            (Some(producto), Some(proveedor)) => Ok((producto, proveedor)),
            (None, _) => Err(AppError::Validation {
                message: "Producto y proveedor son obligatorios en el body".to_string(),
                field: Some("producto".to_string()),
            }),
            (_, None) => Err(AppError::Validation {
                message: "Producto y proveedor son obligatorios en el body".to_string(),
                field: Some("proveedor".to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct ProductInput {
    #[serde(default, deserialize_with = "non_blank_text")]
    #[validate(required)]
    pub nombre: Option<String>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub valor_unit: Option<f64>,

    #[serde(default, deserialize_with = "non_blank_text")]
    pub caregoria: Option<String>,

    #[serde(default, deserialize_with = "non_blank_text")]
    #[validate(required)]
    pub referencia: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct SupplierInput {
    #[serde(default, deserialize_with = "non_blank_text")]
    #[validate(required)]
    pub nombre: Option<String>,

    #[serde(default, deserialize_with = "non_blank_text")]
    #[validate(required)]
    pub direcion: Option<String>,

    #[serde(default, deserialize_with = "non_blank_text")]
    #[validate(required)]
    pub correo: Option<String>,

    #[serde(default, deserialize_with = "non_blank_text")]
    pub telefono: Option<String>,
}

/// Names of the missing required fields, prefixed with `scope.`
fn missing_fields(scope: &str, input: &impl Validate) -> Vec<String> {
    match input.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| format!("{}.{}", scope, field))
                .collect();
            fields.sort();
            fields
        }
    }
}

/// Validate both inputs together so the client sees every missing field at once
pub fn validate_pair(
    product: ProductInput,
    supplier: SupplierInput,
) -> Result<(NewProduct, NewSupplier)> {
    let mut missing = missing_fields("producto", &product);
    missing.extend(missing_fields("proveedor", &supplier));

    match (product.into_new(), supplier.into_new()) {
        (Some(product), Some(supplier)) if missing.is_empty() => Ok((product, supplier)),
        _ => Err(AppError::Validation {
            message: format!("Faltan campos obligatorios: {}", missing.join(", ")),
            field: missing.into_iter().next(),
        }),
    }
}

impl ProductInput {
    fn into_new(self) -> Option<NewProduct> {
        Some(NewProduct {
            nombre: self.nombre?,
            valor_unit: self.valor_unit.unwrap_or(0.0),
            caregoria: self.caregoria,
            referencia: self.referencia?,
        })
    }
}

impl SupplierInput {
    fn into_new(self) -> Option<NewSupplier> {
        Some(NewSupplier {
            nombre: self.nombre?,
            direcion: self.direcion?,
            correo: self.correo?,
            telefono: self.telefono,
        })
    }
}

/// JSON scalar accepted where the form may send either a number or a string
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

/// Trimmed text; empty strings become `None`. Numbers are kept as their text.
fn non_blank_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(Scalar::Number(n)) => Some(n.to_string()),
        Some(Scalar::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    })
}

/// Number or numeric string; blanks become `None`.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(Scalar::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| de::Error::custom("valor_unit fuera de rango")),
        Some(Scalar::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            // f64 parsing also accepts "NaN" and "inf"
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(de::Error::custom(format!(
                    "valor_unit no es numérico: {}",
                    trimmed
                ))),
            }
        }
    }
}
