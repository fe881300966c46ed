//! Reindex schema models.
//!
//! These structures mirror the selection set of [`crate::SCHEMA_QUERY`].
//! Attributes serialize in declaration order, which follows the query's
//! selection order. Keys outside the selection set are not kept.
//!
//! Every attribute is nullable on the wire. The three top-level record shapes
//! ([`SchemaType`], [`FieldDescriptor`], [`PermissionEntry`]) skip `None`
//! attributes when serialized, which is how null values get stripped from the
//! schema file. The nested [`PermissionGrant`] and [`Ordering`] objects keep
//! their nulls.

use serde::{Deserialize, Serialize};

/// A type definition in a Reindex application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type kind, e.g. `OBJECT`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<PermissionEntry>>,
}

/// A field on a [`SchemaType`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_null: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<String>,
    /// Element or node type for `List` and `Connection` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of_type: Option<String>,
    /// Name of the field on the other side of a relation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_permissions: Option<PermissionGrant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ordering: Option<Ordering>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,
}

/// A permission rule attached to a [`SchemaType`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionEntry {
    /// `USER`, `AUTHENTICATED` or `EVERYONE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grantee: Option<String>,
    /// Path from the object to the user the rule applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_path: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permitted_fields: Option<Vec<String>>,
}

/// Permissions a connection field grants over the related objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrant {
    #[serde(default)]
    pub read: Option<bool>,
    #[serde(default)]
    pub create: Option<bool>,
    #[serde(default)]
    pub update: Option<bool>,
    #[serde(default)]
    pub delete: Option<bool>,
    #[serde(default)]
    pub permitted_fields: Option<Vec<String>>,
}

/// Default ordering of a connection field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    #[serde(default)]
    pub field: Option<String>,
    /// `ASC` or `DESC`
    #[serde(default)]
    pub order: Option<String>,
}

/// GraphQL response envelope for the schema query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: Option<SchemaData>,
    /// Errors reported by the service, kept verbatim
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

/// `data` member of the schema query response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaData {
    #[serde(default)]
    pub viewer: Option<Viewer>,
}

/// `viewer` root field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    #[serde(default)]
    pub all_reindex_types: Option<TypeConnection>,
}

/// Connection over all types of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConnection {
    #[serde(default)]
    pub nodes: Option<Vec<SchemaType>>,
}

impl SchemaData {
    /// Extracts the type list, if the response carried one.
    pub fn into_types(self) -> Option<Vec<SchemaType>> {
        self.viewer?.all_reindex_types?.nodes
    }
}

impl SchemaType {
    /// Number of fields defined on this type.
    pub fn field_count(&self) -> usize {
        self.fields.as_ref().map_or(0, Vec::len)
    }
}
