//! Tools backed by the service catalog, plus the simulated lead-capture
//! tools. Missing catalog data yields an "unavailable" answer, never an error.

use std::fmt::Write as _;
use std::sync::Arc;

use growthbot_config::Catalog;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::definitions::tool_definition;
use super::registry::ToolRegistry;
use crate::{ToolDefinition, ToolError};

/// The closed set of tools GrowthBot exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogTool {
    CompanyDetails,
    ServicesOverview,
    ServiceDetail,
    PricingOverview,
    GeneralProcess,
    StoreClientInfo,
    SendQuestionnaireEmail,
}

impl CatalogTool {
    pub const ALL: [CatalogTool; 7] = [
        Self::CompanyDetails,
        Self::ServicesOverview,
        Self::ServiceDetail,
        Self::PricingOverview,
        Self::GeneralProcess,
        Self::StoreClientInfo,
        Self::SendQuestionnaireEmail,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CompanyDetails => "get_company_details",
            Self::ServicesOverview => "get_services_overview",
            Self::ServiceDetail => "get_service_detail",
            Self::PricingOverview => "get_pricing_overview",
            Self::GeneralProcess => "get_general_process",
            Self::StoreClientInfo => "store_client_info",
            Self::SendQuestionnaireEmail => "send_detailed_questionnaire_email",
        }
    }

    /// Schema advertised to the model. The service-detail description lists
    /// the catalog's service names so the model can spell them exactly.
    pub fn definition(self, catalog: &Catalog) -> ToolDefinition {
        let name = self.name();
        match self {
            Self::CompanyDetails => tool_definition(
                name,
                "Get general information about the company: summary, location and contact details.",
                json!({}),
                &[],
            ),
            Self::ServicesOverview => tool_definition(
                name,
                "List the available services with a short description of each.",
                json!({}),
                &[],
            ),
            Self::ServiceDetail => {
                let mut description = String::from(
                    "Get the step-by-step process for one or more services. \
                     Separate several service names with commas.",
                );
                let names = catalog.service_names();
                if !names.is_empty() {
                    let _ = write!(description, " Supported services: {}.", names.join(", "));
                }
                tool_definition(
                    name,
                    &description,
                    json!({
                        "service_names": {
                            "type": "string",
                            "description": "Comma-separated service names, e.g. 'Create Website, API Development'"
                        }
                    }),
                    &["service_names"],
                )
            }
            Self::PricingOverview => tool_definition(
                name,
                "Get an overview of how the company prices its work.",
                json!({}),
                &[],
            ),
            Self::GeneralProcess => tool_definition(
                name,
                "Describe the general process the company follows on projects.",
                json!({}),
                &[],
            ),
            Self::StoreClientInfo => tool_definition(
                name,
                "(Simulation) Record a prospective client's name, email and the services they are interested in. Nothing is stored.",
                json!({
                    "name": { "type": "string", "description": "Client name" },
                    "email": { "type": "string", "description": "Client email address" },
                    "services_interested": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Services the client asked about"
                    }
                }),
                &["name", "email", "services_interested"],
            ),
            Self::SendQuestionnaireEmail => tool_definition(
                name,
                "(Simulation) Prepare the follow-up email with a link to the detailed questionnaire. Nothing is sent.",
                json!({
                    "name": { "type": "string", "description": "Client name" },
                    "email": { "type": "string", "description": "Client email address" }
                }),
                &["name", "email"],
            ),
        }
    }

    pub fn run(self, catalog: &Catalog, args: &Value) -> Result<String, ToolError> {
        match self {
            Self::CompanyDetails => Ok(company_details(catalog)),
            Self::ServicesOverview => Ok(services_overview(catalog)),
            Self::ServiceDetail => {
                let args: ServiceDetailArgs = parse_args(self, args)?;
                service_detail(catalog, &args.service_names.into_list())
                    .ok_or_else(|| invalid(self, "no service names given"))
            }
            Self::PricingOverview => Ok(pricing_overview(catalog)),
            Self::GeneralProcess => Ok(general_process(catalog)),
            Self::StoreClientInfo => {
                let args: ClientInfoArgs = parse_args(self, args)?;
                store_client_info(args)
            }
            Self::SendQuestionnaireEmail => {
                let args: EmailArgs = parse_args(self, args)?;
                Ok(questionnaire_email(&args))
            }
        }
    }
}

/// Build the registry holding every [`CatalogTool`], sharing one catalog.
pub fn catalog_registry(catalog: Arc<Catalog>) -> ToolRegistry {
    CatalogTool::ALL
        .into_iter()
        .fold(ToolRegistry::builder(), |builder, tool| {
            let data = Arc::clone(&catalog);
            builder.register(
                tool.definition(&catalog),
                Box::new(move |args: &Value| tool.run(&data, args)),
            )
        })
        .build()
}

#[derive(Deserialize)]
struct ServiceDetailArgs {
    service_names: ServiceNames,
}

/// Models sometimes send a list where a comma-separated string is declared.
#[derive(Deserialize)]
#[serde(untagged)]
enum ServiceNames {
    Joined(String),
    List(Vec<String>),
}

impl ServiceNames {
    fn into_list(self) -> Vec<String> {
        let raw = match self {
            Self::Joined(s) => s.split(',').map(str::to_string).collect(),
            Self::List(v) => v,
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Deserialize)]
struct ClientInfoArgs {
    name: String,
    email: String,
    #[serde(default)]
    services_interested: Vec<String>,
}

#[derive(Deserialize)]
struct EmailArgs {
    name: String,
    email: String,
}

fn parse_args<T: DeserializeOwned>(tool: CatalogTool, args: &Value) -> Result<T, ToolError> {
    serde_json::from_value(args.clone()).map_err(|e| invalid(tool, &e.to_string()))
}

fn invalid(tool: CatalogTool, message: &str) -> ToolError {
    ToolError::InvalidArguments {
        tool: tool.name().to_string(),
        message: message.to_string(),
    }
}

fn or_na(value: Option<&String>) -> &str {
    value.map(String::as_str).unwrap_or("N/A")
}

fn company_details(catalog: &Catalog) -> String {
    let company = catalog.company();
    if company.is_empty() {
        return "Sorry, the company details are unavailable right now.".to_string();
    }

    let name = company.name.as_deref().unwrap_or("Our Company");
    let location = company.location.as_deref().unwrap_or("location not specified");
    let summary = company.summary.as_deref().unwrap_or("No summary available.");

    let mut out = format!("About {name} ({location}):\n{summary}\n");
    if let Some(tagline) = company.tagline.as_deref() {
        let _ = write!(out, "\nTagline: \"{tagline}\"\n");
    }
    let contact = &company.contact;
    let _ = write!(
        out,
        "\nContact:\n- Email: {}\n- Website: {}\n- Phone: {}",
        or_na(contact.email.as_ref()),
        or_na(contact.website.as_ref()),
        or_na(contact.phone.as_ref()),
    );
    out
}

fn services_overview(catalog: &Catalog) -> String {
    let services = catalog.services();
    if services.is_empty() {
        return "Sorry, the list of services is unavailable right now.".to_string();
    }

    let mut out = String::from("Our Services:\n");
    for service in services {
        let _ = writeln!(
            out,
            "- {}: {}",
            service.name,
            service
                .short_description
                .as_deref()
                .unwrap_or("No description available.")
        );
    }
    out.push_str("\nWould you like to know more about any of these services?");
    out
}

/// One section per requested name, in request order. `None` if nothing
/// was requested.
fn service_detail(catalog: &Catalog, requested: &[String]) -> Option<String> {
    if requested.is_empty() {
        return None;
    }

    let sections: Vec<String> = requested
        .iter()
        .map(|name| match catalog.find_service(name) {
            Some(entry) if entry.process.is_empty() => format!(
                "## {}\nDetails about the process for this service are not currently available.",
                entry.name
            ),
            Some(entry) => {
                let mut section = format!("## {}\nHere's how it typically works:", entry.name);
                for (i, step) in entry.process.iter().enumerate() {
                    let _ = write!(section, "\n{}. {step}", i + 1);
                }
                section
            }
            None => {
                let available = catalog.service_names();
                if available.is_empty() {
                    format!("Sorry, I don't have details for '{name}'.")
                } else {
                    format!(
                        "Sorry, I don't have details for '{name}'. Available services: {}.",
                        available.join(", ")
                    )
                }
            }
        })
        .collect();

    Some(sections.join("\n\n"))
}

fn pricing_overview(catalog: &Catalog) -> String {
    match catalog.pricing_approach() {
        Some(p) => format!("Pricing Approach: {p}"),
        None => "Pricing information is currently unavailable. Please contact us for a quote."
            .to_string(),
    }
}

fn general_process(catalog: &Catalog) -> String {
    match catalog.general_process() {
        Some(p) => format!("Our General Process: {p}"),
        None => "Details about our general process are not available.".to_string(),
    }
}

fn store_client_info(args: ClientInfoArgs) -> Result<String, ToolError> {
    let services: Vec<&str> = args
        .services_interested
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if services.is_empty() {
        return Err(invalid(
            CatalogTool::StoreClientInfo,
            &format!("no services specified for '{}'", args.name),
        ));
    }

    info!(services = services.len(), "simulated client info capture");
    Ok(format!(
        "Status: OK - simulated storing details for {} <{}> (interested in: {}). \
         Nothing has been stored; this is a demo.",
        args.name,
        args.email,
        services.join(", ")
    ))
}

fn questionnaire_email(args: &EmailArgs) -> String {
    info!("simulated questionnaire email");
    format!(
        "Simulated email (not sent)\n\
         To: {} <{}>\n\
         Subject: Your project questionnaire\n\n\
         Hi {}, thanks for chatting with us! Please fill in the detailed questionnaire \
         so we can prepare a tailored proposal.\n\n\
         Nothing has been sent; this is a demo.",
        args.name, args.email, args.name
    )
}
