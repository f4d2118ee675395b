use serde::{Deserialize, Serialize};

/// CycloneDX AI-BOM document as emitted by AI scanning tools
///
/// Only the fields the viewer needs are modelled. Unknown fields are
/// ignored on deserialization; `bomFormat`, `specVersion` and `version`
/// are carried through unexamined as raw JSON values. Fields that only feed
/// the detail panel are all defaulted, so a document never fails to parse
/// because of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycloneDxBom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bom_format: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BomMetadata>,
    #[serde(default)]
    pub components: Vec<BomComponent>,
    /// `None` when the document has no `services` field at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<BomService>>,
    #[serde(default)]
    pub dependencies: Vec<BomDependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BomMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<OrganizationalEntity>,
}

/// A detected AI asset: model, agent, library, MCP server, tool, ...
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BomComponent {
    #[serde(rename = "bom-ref")]
    pub bom_ref: String,
    pub name: String,
    /// Raw CycloneDX component type. Not used for node classification.
    #[serde(rename = "type", default)]
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<OrganizationalEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<BomAuthor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<LicenseChoice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<ExternalReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<BomEvidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_card: Option<ModelCard>,
}

/// An external service the scanned code talks to
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BomService {
    #[serde(rename = "bom-ref")]
    pub bom_ref: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<OrganizationalEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<BomProperty>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BomDependency {
    #[serde(rename = "ref")]
    pub dependency_ref: String,
    /// Absent and empty lists are treated the same
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrganizationalEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<String>,
}

impl OrganizationalEntity {
    pub fn primary_url(&self) -> Option<&str> {
        self.url.first().map(String::as_str)
    }

    /// Name, or the first url for an unnamed entity
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| self.primary_url())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BomAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl BomAuthor {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LicenseChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// SPDX license expression, used instead of `license`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct License {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl License {
    /// SPDX id when present, otherwise the free-form name
    pub fn display_name(&self) -> Option<&str> {
        self.id.as_deref().or(self.name.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExternalReference {
    #[serde(rename = "type", default)]
    pub reference_type: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BomEvidence {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<EvidenceOccurrence>,
}

/// Where in the scanned sources a component was detected
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EvidenceOccurrence {
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_parameters: Option<ModelParameters>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<ModelApproach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<ModelFormat>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<ModelFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModelApproach {
    #[serde(rename = "type", default)]
    pub approach_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModelFormat {
    #[serde(default)]
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BomProperty {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}
