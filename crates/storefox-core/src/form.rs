//! Form state for the store console.
//!
//! [`FormData`] holds the store-creation inputs and is mutated one field at a
//! time through [`FormData::set_field`], mirroring keystroke-level updates.
//! [`MappingForm`] holds the two standalone device-mapping inputs.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Addressable fields of [`FormData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    City,
    Region,
    TenantId,
    DeviceId,
    StoreId,
    Token,
}

impl FormField {
    /// Wire name used by the API and by field-keyed updates.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::City => "city",
            FormField::Region => "region",
            FormField::TenantId => "tenantId",
            FormField::DeviceId => "deviceId",
            FormField::StoreId => "store_id",
            FormField::Token => "token",
        }
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "city" => Ok(FormField::City),
            "region" => Ok(FormField::Region),
            "tenantId" | "tenant_id" => Ok(FormField::TenantId),
            "deviceId" | "device_id" => Ok(FormField::DeviceId),
            "store_id" | "storeId" => Ok(FormField::StoreId),
            "token" => Ok(FormField::Token),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Store-creation inputs.
///
/// `store_id` is derived by the creation workflow and overwritten right
/// before the create call; whatever was typed into it is discarded.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub city: String,
    pub region: String,
    pub tenant_id: i64,
    pub device_id: String,
    pub store_id: String,
    pub token: String,
}

impl FormData {
    /// Merge one changed value into the record.
    ///
    /// `tenantId` is coerced to an integer (0 when the text has no leading
    /// integer); every other field is stored as raw text.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not a form field.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = name.parse::<FormField>()?;
        self.set(field, value);
        Ok(())
    }

    /// Typed variant of [`FormData::set_field`].
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::City => self.city = value.to_string(),
            FormField::Region => self.region = value.to_string(),
            FormField::TenantId => self.tenant_id = parse_tenant_id(value),
            FormField::DeviceId => self.device_id = value.to_string(),
            FormField::StoreId => self.store_id = value.to_string(),
            FormField::Token => self.token = value.to_string(),
        }
    }

    /// Replace the whole record with the empty template.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Debug for FormData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormData")
            .field("name", &self.name)
            .field("city", &self.city)
            .field("region", &self.region)
            .field("tenant_id", &self.tenant_id)
            .field("device_id", &self.device_id)
            .field("store_id", &self.store_id)
            .field("token", &redact(&self.token))
            .finish()
    }
}

/// Parse the leading integer of `raw`, the way a numeric text input is read.
///
/// Leading whitespace and a single sign are accepted and parsing stops at the
/// first non-digit, so `"42abc"` is 42 and `"3.9"` is 3. Returns `None` for
/// text without a leading integer or one that overflows `i64`.
#[must_use]
pub fn try_parse_tenant_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign_len, rest) = match trimmed.as_bytes().first() {
        Some(b'-' | b'+') => (1, &trimmed[1..]),
        _ => (0, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse::<i64>().ok()
}

/// [`try_parse_tenant_id`] with the form's fallback of 0.
#[must_use]
pub fn parse_tenant_id(raw: &str) -> i64 {
    try_parse_tenant_id(raw).unwrap_or(0)
}

/// Device-mapping inputs, independent of [`FormData`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MappingForm {
    /// Optional device filter; empty means "no filter".
    pub device_id: String,
    pub token: String,
}

impl MappingForm {
    pub fn clear_device_id(&mut self) {
        self.device_id.clear();
    }

    pub fn clear_token(&mut self) {
        self.token.clear();
    }
}

impl std::fmt::Debug for MappingForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingForm")
            .field("device_id", &self.device_id)
            .field("token", &redact(&self.token))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "[redacted]"
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
