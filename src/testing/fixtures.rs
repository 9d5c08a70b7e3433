//! Plugin descriptions shared by unit tests.

use toml::Table;

use crate::domain::PluginKind;

/// Smallest description that validates for `kind`.
pub fn minimal_config(kind: PluginKind) -> String {
    match kind {
        PluginKind::Client => r#"[config]
type = "client"
classname = "FooPlugin"
name = "foo"
destinationtype = "online"
schedule = "daily"
displayname = "Foo Sync"
transport = "ip"
enabled = true
syncdirection = "two-way"
conflictpolicy = "prefer remote"

[config.agent]
name = "foo-agent"
"#
        .to_string(),
        PluginKind::Server => r#"[config]
type = "server"
classname = "FooPlugin"
name = "foo"
transport = "usb"
enabled = true
"#
        .to_string(),
        PluginKind::Storage => r#"[config]
type = "storage"
classname = "FooPlugin"
name = "foo"
mimetype = "text/x-vcard"
enabled = true
"#
        .to_string(),
    }
}

/// Client description exercising every nested section.
pub fn full_client_config() -> String {
    format!(
        r#"{}
[config.agent.props]
"Sync Protocol" = "SyncML12"

[config.storages.hcontacts]
enabled = true
"Local URI" = "./contacts"
"Target URI" = "./card"

[config.ext-config]
remote_id = "abc"
"#,
        minimal_config(PluginKind::Client)
    )
}

/// [`minimal_config`] as a parsed TOML table.
pub fn minimal_table(kind: PluginKind) -> Table {
    toml::from_str(&minimal_config(kind)).expect("fixture is valid TOML")
}
