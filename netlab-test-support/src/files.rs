//! Temporary dataset directories populated with small input files.

use std::{
    fmt::Write as _,
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// SNAP-style edge list with a four-node component and a two-node one.
pub const TWO_COMPONENT_EDGE_LIST: &str = "\
# Undirected graph: two components
# FromNodeId\tToNodeId
10\t11
11\t12
12\t13
13\t10
20\t21
";

/// A water network whose junctions form a triangle plus a detached pair.
pub const WATER_NETWORK: &str = "\
P-1\tJ-1\tJ-2\t100\t12\t130\t0\t0\tOpen
P-2\tJ-2\tJ-3\t100\t12\t130\t0\t0\tOpen
P-3\tJ-3\tJ-1\t100\t12\t130\t0\t0\tOpen
P-4\tJ-3\tR-1\t100\t12\t130\t0\t0\tOpen
P-5\tJ-8\tJ-9\t100\t12\t130\t0\t0\tOpen
J-1\t0.0\t0.0
J-2\t1.0\t0.0
J-3\t0.5\t0.8
";

/// A GML power grid: a path on three nodes plus an isolated node.
pub const POWER_GRID_GML: &str = "\
graph
[
  node [ id 0 ]
  node [ id 1 ]
  node [ id 2 ]
  node [ id 3 ]
  edge [ source 0 target 1 ]
  edge [ source 1 target 2 ]
]
";

/// A scratch directory removed when dropped.
#[derive(Debug)]
pub struct DatasetDir {
    dir: TempDir,
}

impl DatasetDir {
    /// Creates an empty scratch directory.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Returns the directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `contents` to `name` inside the directory.
    ///
    /// # Errors
    /// Returns an error when the file cannot be written.
    ///
    /// # Examples
    /// ```
    /// use netlab_test_support::files::DatasetDir;
    ///
    /// let dir = DatasetDir::new()?;
    /// let path = dir.write("ky2.txt", "J-1\t0\t0\n")?;
    /// assert!(path.exists());
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Writes the three connectome tables under their canonical names.
    ///
    /// # Errors
    /// Returns an error when any file cannot be written.
    pub fn write_connectome(&self, tables: &ConnectomeCsv) -> io::Result<()> {
        self.write("traced-neurons.csv", &tables.neurons_csv())?;
        self.write("traced-total-connections.csv", &tables.totals_csv())?;
        self.write("traced-roi-connections.csv", &tables.rois_csv())?;
        Ok(())
    }
}

/// Rows for the three connectome CSV files.
#[derive(Debug, Clone, Default)]
pub struct ConnectomeCsv {
    /// `(bodyId, type, instance)` rows.
    pub neurons: Vec<(u64, &'static str, &'static str)>,
    /// `(bodyId_pre, bodyId_post, weight)` rows.
    pub totals: Vec<(u64, u64, u64)>,
    /// `(bodyId_pre, bodyId_post, roi, weight)` rows.
    pub rois: Vec<(u64, u64, &'static str, u64)>,
}

impl ConnectomeCsv {
    /// A small connectome where pair `(1, 2)` spans two ROIs.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            neurons: vec![
                (1, "KCg-m", "KCg-m_R"),
                (2, "MBON01", "MBON01(y5B'2a)_R"),
                (3, "", ""),
            ],
            totals: vec![(1, 2, 12), (2, 3, 4), (3, 1, 7)],
            rois: vec![
                (1, 2, "gL(R)", 9),
                (1, 2, "CA(R)", 3),
                (2, 3, "SMP(R)", 4),
                (3, 1, "AL(L)", 5),
                (3, 1, "unknown_roi", 5),
            ],
        }
    }

    /// Renders `traced-neurons.csv`, with an extra column readers must skip.
    #[must_use]
    pub fn neurons_csv(&self) -> String {
        let mut csv = String::from("bodyId,type,instance,status\n");
        for (body_id, kind, instance) in &self.neurons {
            let _ = writeln!(csv, "{body_id},{kind},{instance},Traced");
        }
        csv
    }

    /// Renders `traced-total-connections.csv`.
    #[must_use]
    pub fn totals_csv(&self) -> String {
        let mut csv = String::from("bodyId_pre,bodyId_post,weight\n");
        for (pre, post, weight) in &self.totals {
            let _ = writeln!(csv, "{pre},{post},{weight}");
        }
        csv
    }

    /// Renders `traced-roi-connections.csv`; ROI labels are quoted.
    #[must_use]
    pub fn rois_csv(&self) -> String {
        let mut csv = String::from("bodyId_pre,bodyId_post,roi,weight\n");
        for (pre, post, roi, weight) in &self.rois {
            let _ = writeln!(csv, "{pre},{post},\"{roi}\",{weight}");
        }
        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn connectome_tables_land_under_canonical_names() -> io::Result<()> {
        let dir = DatasetDir::new()?;
        dir.write_connectome(&ConnectomeCsv::sample())?;
        for name in [
            "traced-neurons.csv",
            "traced-total-connections.csv",
            "traced-roi-connections.csv",
        ] {
            assert!(dir.path().join(name).is_file(), "{name} missing");
        }
        let rois = fs::read_to_string(dir.path().join("traced-roi-connections.csv"))?;
        assert!(rois.contains("1,2,\"gL(R)\",9\n"));
        Ok(())
    }
}
