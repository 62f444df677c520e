// Test utility module for fakegen integration tests
#![allow(dead_code)]

use fakegen::{ClassDescriptor, ClassKind, MethodDescriptor, MethodKind};
use std::fs;
use std::path::{Path, PathBuf};

/// Expected fake for [`login_service`], rendered with default options.
pub const LOGIN_SERVICE_FAKE: &str = include_str!("../data/golden/fake_login_service.swift");

pub fn login_service() -> ClassDescriptor {
    ClassDescriptor::new("LoginService", ClassKind::Class)
        .with_method(
            MethodDescriptor::instance("login(username:password:)")
                .argument("username", "String")
                .argument("password", "String")
                .returns("Bool"),
        )
        .with_method(MethodDescriptor::instance("logout"))
}

/// A protocol touching every member kind.
pub fn session_store() -> ClassDescriptor {
    ClassDescriptor::new("SessionStore", ClassKind::Protocol)
        .with_method(MethodDescriptor::new("shared", MethodKind::StaticProperty).returns("SessionStore"))
        .with_method(MethodDescriptor::new("make", MethodKind::Class).returns("SessionStore"))
        .with_method(MethodDescriptor::new("purge", MethodKind::Static))
        .with_method(MethodDescriptor::new("token", MethodKind::InstanceProperty).returns("String?"))
        .with_method(
            MethodDescriptor::instance("attach(owner:)")
                .argument("owner", "AnyObject")
                .returns("Void"),
        )
        .with_method(MethodDescriptor::new("refresh", MethodKind::Call))
}

pub const LOGIN_MANIFEST_JSON: &str = r#"{
  "classes": [
    {
      "class_name": "LoginService",
      "methods": [
        {
          "name": "login(username:password:)",
          "external_argument_names": ["username", "password"],
          "argument_types": ["String", "String"],
          "return_type": "Bool"
        },
        { "name": "logout" }
      ]
    }
  ]
}
"#;

pub const LOGIN_MANIFEST_YAML: &str = "classes:
  - class_name: LoginService
    methods:
      - name: login(username:password:)
        external_argument_names: [username, password]
        argument_types: [String, String]
        return_type: Bool
      - name: logout
";

/// Write `contents` to `dir/name`, creating parent directories.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(&path, contents).expect("write fixture");
    path
}
