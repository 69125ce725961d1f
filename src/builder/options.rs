//! Typed option values for every wizard step
//!
//! Each option travels across the presentation surface as a kebab-case
//! token (the `data-value` of an option control). Tokens parse into the
//! enums below; anything else is rejected with [`Error::UnknownToken`].

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant ),+
        }

        impl $name {
            /// All options in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire token of this option
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(Error::UnknownToken {
                        kind: stringify!($name),
                        token: other.to_string(),
                    }),
                }
            }
        }
    };
}

option_enum! {
    /// Package chosen at the first web step
    PackageType {
        /// Everything arranged by us
        CompletePackage => "complete-package",
        /// Individual services
        ALaCarte => "a-la-carte",
    }
}

option_enum! {
    /// Whether the customer already owns a domain and hosting
    DomainHosting {
        Present => "domain-hosting-yes",
        Missing => "domain-hosting-no",
    }
}

option_enum! {
    /// Individually ordered web services
    Service {
        Webdesign => "webdesign",
        Hosting => "hosting",
        Domain => "domain",
    }
}

option_enum! {
    /// Extra modules for a website
    Module {
        Seo => "seo",
        Maintenance => "maintenance",
        Webshop => "webshop",
        CmsTraining => "cms-training",
        Branding => "branding",
        /// Sentinel: no extra modules, exclusive with every other module
        None => "none",
    }
}

option_enum! {
    /// Whether cloud services are already in use
    CloudEnvironment {
        AlreadyOnCloud => "cloud-yes",
        NotOnCloud => "cloud-no",
    }
}

option_enum! {
    /// Current cloud provider
    Provider {
        Aws => "aws",
        Azure => "azure",
        Gcp => "gcp",
        Other => "other-provider",
    }
}

option_enum! {
    /// Migration horizon for customers not yet on the cloud
    MigrationPlan {
        WithinThreeMonths => "migration-3months",
        WithinSixMonths => "migration-6months",
        Exploring => "migration-exploring",
        NoPlans => "migration-no",
    }
}

option_enum! {
    /// Problems customers already on the cloud run into
    Challenge {
        CostManagement => "cost-management",
        Security => "security",
        Monitoring => "monitoring",
        Scalability => "scalability",
        Devops => "devops",
        Containers => "containers",
        Other => "other-challenge",
    }
}

option_enum! {
    /// What a migrating customer wants to move
    MigrationGoal {
        WebsiteApp => "website-app",
        BackendApi => "backend-api",
        DataStorage => "data-storage",
        CicdPipelines => "cicd-pipelines",
        FullInfrastructure => "full-infrastructure",
    }
}

option_enum! {
    /// Technologies of interest, asked on both cloud branches
    Technology {
        DevopsCicd => "devops-cicd",
        ContainerOrchestration => "container-orchestration",
        MonitoringSupport => "monitoring-support",
        InfrastructureCode => "infrastructure-code",
        LoadBalancing => "load-balancing",
        IdentityAccess => "identity-access",
        Other => "other-tech",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_parse_back() {
        for module in Module::ALL {
            assert_eq!(module.as_str().parse::<Module>().unwrap(), *module);
        }
        assert_eq!("other-tech".parse::<Technology>().unwrap(), Technology::Other);
        assert_eq!("migration-3months".parse::<MigrationPlan>().unwrap(), MigrationPlan::WithinThreeMonths);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = "ftp".parse::<Service>().unwrap_err();
        assert!(matches!(err, Error::UnknownToken { kind: "Service", .. }));
    }

    #[test]
    fn test_serde_uses_wire_tokens() {
        let json = serde_json::to_string(&Provider::Other).unwrap();
        assert_eq!(json, "\"other-provider\"");
        let parsed: Challenge = serde_json::from_str("\"cost-management\"").unwrap();
        assert_eq!(parsed, Challenge::CostManagement);
    }
}
