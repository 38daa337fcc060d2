pub struct CatalogFixture {
    pub name: &'static str,
    pub packages: &'static [&'static str],
}

pub const CATALOGS: &[CatalogFixture] = &[
    CatalogFixture {
        name: "registry.redhat.io/redhat/redhat-operator-index",
        packages: &[
            "advanced-cluster-management",
            "openshift-gitops-operator",
            "serverless-operator",
        ],
    },
    CatalogFixture {
        name: "registry.redhat.io/redhat/certified-operator-index",
        packages: &["crunchy-postgres-operator", "nginx-ingress-operator"],
    },
    CatalogFixture {
        name: "registry.redhat.io/redhat/community-operator-index",
        packages: &[
            "argocd-operator",
            "cert-manager",
            "etcd",
            "grafana-operator",
            "jaeger",
            "keycloak-operator",
            "kiali",
            "mariadb-operator",
            "prometheus",
            "redis-operator",
            "strimzi-kafka-operator",
            "vault-operator",
        ],
    },
];

pub const BUNDLE_VERSIONS: &[&str] = &["v1.0.0", "v1.1.0", "v2.0.0"];

pub const OCP_VERSIONS: &[&str] = &["v4.14", "v4.15", "v4.16", "v4.17", "v4.18"];

pub const SORT_TYPES: &[&str] = &["pulls", "name", "trend"];

pub const ALL_OPERATORS_CATALOG: &str = "all_operators";

pub const EXPORT_MAX_DAYS: u32 = 90;

/// Days of history the fixtures carry, counted from `db_start_date`.
pub const HISTORY_DAYS: u64 = 365;

pub fn find_catalog(name: &str) -> Option<&'static CatalogFixture> {
    CATALOGS.iter().find(|c| c.name == name)
}

pub fn bundles_of(package: &str) -> Vec<String> {
    BUNDLE_VERSIONS
        .iter()
        .map(|v| format!("{package}.{v}"))
        .collect()
}
