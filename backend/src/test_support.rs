//! Helpers shared by unit tests and the integration suites.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature, which the
//! crate enables on itself as a dev-dependency.

pub mod files {
    //! File access for tests through `cap_std` directory handles.

    use std::io;
    use std::path::Path;

    use cap_std::{ambient_authority, fs::Dir};

    /// Read `name` inside `dir` as UTF-8 text.
    ///
    /// # Examples
    /// ```
    /// use screening_backend::test_support::files::{exists_in, read_in};
    ///
    /// let dir = std::env::temp_dir();
    /// assert!(!exists_in(&dir, "screening-missing-export.json"));
    /// assert!(read_in(&dir, "screening-missing-export.json").is_err());
    /// ```
    pub fn read_in(dir: &Path, name: &str) -> io::Result<String> {
        Dir::open_ambient_dir(dir, ambient_authority())?.read_to_string(name)
    }

    /// Whether `name` exists inside `dir`. An unopenable `dir` counts as absent.
    #[must_use]
    pub fn exists_in(dir: &Path, name: &str) -> bool {
        Dir::open_ambient_dir(dir, ambient_authority()).is_ok_and(|handle| handle.exists(name))
    }
}

pub mod openapi {
    //! Lookups into the components of a generated OpenAPI document.

    use utoipa::openapi::schema::{Object, Schema};
    use utoipa::openapi::{OpenApi, RefOr};

    /// Component schema registered as `name`.
    ///
    /// # Panics
    /// When the document has no such component.
    #[must_use]
    pub fn component<'a>(doc: &'a OpenApi, name: &str) -> &'a RefOr<Schema> {
        doc.components
            .as_ref()
            .and_then(|components| components.schemas.get(name))
            .unwrap_or_else(|| panic!("component schema '{name}' is not registered"))
    }

    /// Inline object behind `schema`.
    ///
    /// # Panics
    /// When `schema` is a `$ref` or not an object.
    #[must_use]
    pub fn object<'a>(schema: &'a RefOr<Schema>, name: &str) -> &'a Object {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj,
            RefOr::Ref(reference) => panic!(
                "schema '{name}' points at {}; look the component up instead",
                reference.ref_location
            ),
            RefOr::T(_) => panic!("schema '{name}' is not an object schema"),
        }
    }

    /// Property `field` declared on `obj`.
    ///
    /// # Panics
    /// When the property is absent.
    #[must_use]
    pub fn property<'a>(obj: &'a Object, field: &str) -> &'a RefOr<Schema> {
        obj.properties
            .get(field)
            .unwrap_or_else(|| panic!("property '{field}' is not declared"))
    }
}
