//! The GraphQL query used to read an application's schema.

/// Selects every type of the application with its fields and permissions.
///
/// The selection set matches the field order of [`crate::models`].
/// `first: 2147483647` is the largest page size the service accepts, which
/// returns all types in a single page.
pub const SCHEMA_QUERY: &str = r"
  query schemaQuery {
    viewer {
      allReindexTypes(first: 2147483647) {
        nodes {
          name
          kind
          interfaces
          fields {
            name
            type
            description
            nonNull
            builtin
            deprecationReason
            ofType
            reverseName
            grantPermissions {
              read
              create
              update
              delete
              permittedFields
            }
            defaultOrdering {
              field
              order
            }
            unique
            orderable
            filterable
          }
          permissions {
            grantee
            userPath
            read
            create
            update
            delete
            permittedFields
          }
        }
      }
    }
  }
";
