use std::fmt::{self, Display, Formatter};

/// Named workload shape, applied uniformly across codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScenarioKind {
    /// Encode then decode a single record on one thread.
    Basic,
    /// Encode then decode the whole batch on one thread.
    Large,
    /// The basic cycle split across a fixed pool of workers.
    Parallel,
    /// Decode the malformed payload; success is the failure condition.
    InvalidInput,
}

/// How a scenario drives its iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Parallel,
    ErrorPath,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [
        ScenarioKind::Basic,
        ScenarioKind::Large,
        ScenarioKind::Parallel,
        ScenarioKind::InvalidInput,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Basic => "basic",
            ScenarioKind::Large => "large",
            ScenarioKind::Parallel => "parallel",
            ScenarioKind::InvalidInput => "invalid-input",
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        match self {
            ScenarioKind::Basic | ScenarioKind::Large => ExecutionMode::Sequential,
            ScenarioKind::Parallel => ExecutionMode::Parallel,
            ScenarioKind::InvalidInput => ExecutionMode::ErrorPath,
        }
    }

    pub fn descriptor(&self) -> ScenarioDescriptor {
        let description = match self {
            ScenarioKind::Basic => "encode+decode one record",
            ScenarioKind::Large => "encode+decode a batch of records",
            ScenarioKind::Parallel => "encode+decode one record across a worker pool",
            ScenarioKind::InvalidInput => "decode a payload with a type mismatch, expecting failure",
        };
        ScenarioDescriptor {
            kind: *self,
            name: self.name(),
            mode: self.mode(),
            description,
        }
    }
}

impl Display for ScenarioKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioDescriptor {
    pub kind: ScenarioKind,
    pub name: &'static str,
    pub mode: ExecutionMode,
    pub description: &'static str,
}
