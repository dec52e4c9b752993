use std::collections::HashSet;

use serde::Deserialize;

/// Hardware characteristics shown for machine rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MachineSpecs {
    /// Machine subtype (laptop, desktop, server, workstation...)
    #[serde(rename = "type")]
    pub machine_type: Option<String>,
    pub ram: Option<String>,
    pub cpu: Option<String>,
    pub os_version: Option<String>,
    pub disk: Option<String>,
}

impl MachineSpecs {
    /// Labelled spec values in display order, skipping blanks
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [
            ("RAM", self.ram.as_deref()),
            ("CPU", self.cpu.as_deref()),
            ("OS", self.os_version.as_deref()),
            ("Disk", self.disk.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

/// One row of the equipment table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentLine {
    #[serde(rename = "type")]
    pub kind: String,
    pub serial_number: String,
    pub inventory_code: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub specs: Option<MachineSpecs>,
}

impl EquipmentLine {
    pub fn new(kind: impl Into<String>, serial_number: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            serial_number: serial_number.into(),
            ..Default::default()
        }
    }

    pub fn with_inventory_code(mut self, code: impl Into<String>) -> Self {
        self.inventory_code = Some(code.into());
        self
    }

    pub fn with_brand_model(mut self, brand: impl Into<String>, model: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self.model = Some(model.into());
        self
    }

    pub fn with_specs(mut self, specs: MachineSpecs) -> Self {
        self.specs = Some(specs);
        self
    }

    /// Key used to detect the same equipment listed twice: the trimmed serial
    /// number, or the inventory code when the serial is blank
    pub fn dedup_key(&self) -> Option<&str> {
        let serial = self.serial_number.trim();
        if !serial.is_empty() {
            return Some(serial);
        }
        self.inventory_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    /// "Brand Model", or `None` when both are blank
    pub fn brand_model(&self) -> Option<String> {
        let parts: Vec<&str> = [self.brand.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Label shown in the TYPE column
    pub fn display_type(&self) -> String {
        if let Some(machine_type) = self
            .specs
            .as_ref()
            .and_then(|s| s.machine_type.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            let lower = machine_type.to_lowercase();
            return match lower.as_str() {
                "laptop" => "Portable".to_string(),
                "desktop" => "Bureau".to_string(),
                "server" => "Serveur".to_string(),
                "workstation" => "Station de travail".to_string(),
                _ => capitalize(&lower),
            };
        }

        let raw = self.kind.trim();
        match raw.to_lowercase().as_str() {
            "" => String::new(),
            "machine" => "Machine".to_string(),
            "screen" | "écran" | "ecran" => "Écran".to_string(),
            _ => capitalize(raw),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Return every key that appears more than once, each reported once, in the
/// order its first repeat is found. Lines without a key are ignored.
pub fn find_duplicate_keys(lines: &[EquipmentLine]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for key in lines.iter().filter_map(EquipmentLine::dedup_key) {
        if !seen.insert(key) && reported.insert(key) {
            duplicates.push(key.to_string());
        }
    }

    duplicates
}
