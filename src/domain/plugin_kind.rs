use std::fmt;

/// Template shared by every plugin kind for the qmake project file.
pub const PROJECT_TEMPLATE: &str = "project.pro.j2";

/// Which profile document a profile template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRole {
    /// Sync profile for a client plugin, written to `xml/sync/`.
    Sync,
    /// Agent profile referenced by a client sync profile, written to `xml/client/`.
    Agent,
    /// Server profile, written to `xml/server/`.
    Server,
    /// Storage profile, written to `xml/storage/`.
    Storage,
}

impl ProfileRole {
    /// Directory under the output root that receives this profile.
    pub fn dir(&self) -> &'static str {
        match self {
            ProfileRole::Sync => "xml/sync",
            ProfileRole::Agent => "xml/client",
            ProfileRole::Server => "xml/server",
            ProfileRole::Storage => "xml/storage",
        }
    }
}

/// A profile template together with the document it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileTemplate {
    pub template: &'static str,
    pub role: ProfileRole,
}

/// Templates used to generate one plugin kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSet {
    pub header: &'static str,
    pub implementation: &'static str,
    pub profiles: &'static [ProfileTemplate],
}

/// The three plugin kinds understood by the sync framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Client,
    Server,
    Storage,
}

struct KindSpec {
    name: &'static str,
    mandatory_fields: &'static [&'static str],
    templates: TemplateSet,
}

static CLIENT: KindSpec = KindSpec {
    name: "client",
    mandatory_fields: &[
        "classname",
        "name",
        "destinationtype",
        "schedule",
        "displayname",
        "transport",
        "enabled",
        "agent",
        "syncdirection",
        "conflictpolicy",
    ],
    templates: TemplateSet {
        header: "client_plugin.h.j2",
        implementation: "client_plugin.cpp.j2",
        profiles: &[
            ProfileTemplate { template: "sync_profile.xml.j2", role: ProfileRole::Sync },
            ProfileTemplate { template: "sync_agent_profile.xml.j2", role: ProfileRole::Agent },
        ],
    },
};

static SERVER: KindSpec = KindSpec {
    name: "server",
    mandatory_fields: &["classname", "name", "transport", "enabled"],
    templates: TemplateSet {
        header: "server_plugin.h.j2",
        implementation: "server_plugin.cpp.j2",
        profiles: &[ProfileTemplate {
            template: "server_profile.xml.j2",
            role: ProfileRole::Server,
        }],
    },
};

static STORAGE: KindSpec = KindSpec {
    name: "storage",
    mandatory_fields: &["classname", "name", "mimetype", "enabled"],
    templates: TemplateSet {
        header: "storage_plugin.h.j2",
        implementation: "storage_plugin.cpp.j2",
        profiles: &[ProfileTemplate {
            template: "storage_profile.xml.j2",
            role: ProfileRole::Storage,
        }],
    },
};

impl PluginKind {
    /// All plugin kinds.
    pub const ALL: [PluginKind; 3] = [PluginKind::Client, PluginKind::Server, PluginKind::Storage];

    fn spec(&self) -> &'static KindSpec {
        match self {
            PluginKind::Client => &CLIENT,
            PluginKind::Server => &SERVER,
            PluginKind::Storage => &STORAGE,
        }
    }

    /// Value of `config.type` naming this kind.
    pub fn as_str(&self) -> &'static str {
        self.spec().name
    }

    /// Parse a kind from its `config.type` value.
    pub fn parse(value: &str) -> Option<PluginKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value.trim())
    }

    /// Fields that must be present and non-empty in the `config` table.
    pub fn mandatory_fields(&self) -> &'static [&'static str] {
        self.spec().mandatory_fields
    }

    /// Templates for the class files and profiles of this kind.
    pub fn templates(&self) -> &'static TemplateSet {
        &self.spec().templates
    }

    /// Profile directories created under the output root, in creation order.
    pub fn profile_dirs(&self) -> Vec<&'static str> {
        self.templates().profiles.iter().map(|profile| profile.role.dir()).collect()
    }

    /// Allowed values for enumerated fields of this kind.
    pub fn enum_constraints(&self) -> &'static [(&'static str, &'static [&'static str])] {
        match self {
            PluginKind::Server => &[("transport", &["usb", "bt", "ip"])],
            PluginKind::Client | PluginKind::Storage => &[],
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
