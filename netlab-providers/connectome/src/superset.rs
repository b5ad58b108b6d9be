//! Coarse classification of ROI labels.

/// Ordered groups of region labels, each named by a superset.
///
/// Lookups scan the groups in order and stop at the first containing the
/// label, so a label listed twice resolves to its earlier group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiSupersetMapping {
    groups: Vec<(String, Vec<String>)>,
}

const HEMIBRAIN: &[(&str, &[&str])] = &[
    ("AL", &["AL(L)", "AL(R)"]),
    (
        "MB",
        &[
            "CA(L)", "CA(R)", "PED(R)", "a'L(L)", "a'L(R)", "aL(L)", "aL(R)", "b'L(L)", "b'L(R)",
            "bL(L)", "bL(R)", "gL(L)", "gL(R)",
        ],
    ),
    ("CX", &["EB", "FB", "PB", "NO", "AB(L)", "AB(R)"]),
    ("LX", &["BU(L)", "BU(R)", "LAL(L)", "LAL(R)"]),
    ("OL", &["ME(R)", "AME(R)", "LO(R)", "LOP(R)"]),
    ("VLNP", &["AOTU(R)", "AVLP(R)", "PVLP(R)", "PLP(R)", "WED(R)"]),
    ("LH", &["LH(R)"]),
    ("SNP", &["SLP(R)", "SIP(L)", "SIP(R)", "SMP(L)", "SMP(R)"]),
    (
        "INP",
        &[
            "CRE(L)", "CRE(R)", "SCL(L)", "SCL(R)", "ICL(L)", "ICL(R)", "IB", "ATL(L)", "ATL(R)",
        ],
    ),
    (
        "VMNP",
        &[
            "VES(L)", "VES(R)", "EPA(L)", "EPA(R)", "GOR(L)", "GOR(R)", "SPS(L)", "SPS(R)",
            "IPS(R)",
        ],
    ),
    ("PENP", &["SAD", "CAN(R)", "FLA(R)", "PRW"]),
    ("GNG", &["GNG"]),
];

impl RoiSupersetMapping {
    /// Builds a mapping from `(superset, members)` groups, keeping their order.
    ///
    /// # Examples
    /// ```
    /// use netlab_providers_connectome::RoiSupersetMapping;
    ///
    /// let mapping = RoiSupersetMapping::new([("left", ["AL(L)"]), ("right", ["AL(R)"])]);
    /// assert_eq!(mapping.superset_of("AL(R)"), Some("right"));
    /// ```
    #[must_use]
    pub fn new<G, S, M, L>(groups: G) -> Self
    where
        G: IntoIterator<Item = (S, M)>,
        S: Into<String>,
        M: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            groups: groups
                .into_iter()
                .map(|(name, members)| {
                    (name.into(), members.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }

    /// The hemibrain neuropil hierarchy.
    #[must_use]
    pub fn hemibrain() -> Self {
        Self::new(
            HEMIBRAIN
                .iter()
                .map(|(name, members)| (*name, members.iter().copied())),
        )
    }

    /// Returns the first superset whose members include `roi`.
    #[must_use]
    pub fn superset_of(&self, roi: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, members)| members.iter().any(|member| member == roi))
            .map(|(name, _)| name.as_str())
    }

    /// Superset names in lookup order.
    pub fn supersets(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Member labels of `superset`; empty when it is not defined.
    #[must_use]
    pub fn members(&self, superset: &str) -> &[String] {
        self.groups
            .iter()
            .find(|(name, _)| name == superset)
            .map(|(_, members)| members.as_slice())
            .unwrap_or_default()
    }

    /// Number of supersets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no superset is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for RoiSupersetMapping {
    fn default() -> Self {
        Self::hemibrain()
    }
}

/// Classifies every label, yielding `None` for labels no superset lists.
///
/// # Examples
/// ```
/// use netlab_providers_connectome::{RoiSupersetMapping, map_roi_to_superset};
///
/// let mapping = RoiSupersetMapping::default();
/// assert_eq!(
///     map_roi_to_superset(&["AL(L)", "unknown_roi"], &mapping),
///     vec![Some("AL"), None],
/// );
/// ```
#[must_use]
pub fn map_roi_to_superset<'m, S: AsRef<str>>(
    labels: &[S],
    mapping: &'m RoiSupersetMapping,
) -> Vec<Option<&'m str>> {
    labels
        .iter()
        .map(|label| mapping.superset_of(label.as_ref()))
        .collect()
}
