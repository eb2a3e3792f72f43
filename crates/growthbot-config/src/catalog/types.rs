use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub company_info: CompanyInfo,
    pub services_summary: ServicesSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesSummary {
    pub list: Vec<ServiceEntry>,
    pub pricing_approach: Option<String>,
    pub general_process: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEntry {
    pub name: String,
    pub short_description: Option<String>,
    /// Ordered process steps.
    pub process: Vec<String>,
}

impl CompanyInfo {
    /// True when the profile carries nothing worth showing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.summary.is_none() && self.location.is_none()
    }
}

impl Catalog {
    pub fn company(&self) -> &CompanyInfo {
        &self.company_info
    }

    pub fn services(&self) -> &[ServiceEntry] {
        &self.services_summary.list
    }

    /// Case-insensitive lookup by service name, ignoring surrounding whitespace.
    pub fn find_service(&self, name: &str) -> Option<&ServiceEntry> {
        let wanted = name.trim();
        self.services()
            .iter()
            .find(|s| s.name.trim().eq_ignore_ascii_case(wanted))
    }

    pub fn service_names(&self) -> Vec<&str> {
        self.services()
            .iter()
            .map(|s| s.name.as_str())
            .filter(|n| !n.is_empty())
            .collect()
    }

    pub fn pricing_approach(&self) -> Option<&str> {
        non_blank(self.services_summary.pricing_approach.as_deref())
    }

    pub fn general_process(&self) -> Option<&str> {
        non_blank(self.services_summary.general_process.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
