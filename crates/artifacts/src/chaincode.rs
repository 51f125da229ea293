//! Chaincode package ids and explorer locations.

use std::path::PathBuf;

use crate::error::{ArtifactError, ArtifactResult};
use crate::network::{ensure_dir, read_text, write_text, NetworkFiles};

impl NetworkFiles {
    fn chaincode_dir(&self) -> PathBuf {
        self.root_path().join("chaincode")
    }

    pub fn create_chaincode_folder(&self) -> ArtifactResult<()> {
        ensure_dir(&self.chaincode_dir())
    }

    fn package_id_path(&self, label: &str) -> PathBuf {
        self.chaincode_dir().join("package-id").join(label)
    }

    pub fn save_package_id(&self, label: &str, package_id: &str) -> ArtifactResult<()> {
        write_text(&self.package_id_path(label), package_id)
    }

    pub fn package_id(&self, label: &str) -> ArtifactResult<String> {
        let path = self.package_id_path(label);
        if !path.is_file() {
            return Err(ArtifactError::MissingPackageId {
                label: label.to_string(),
            });
        }
        read_text(&path)
    }

    pub fn explorer_root(&self) -> PathBuf {
        self.root_path().join("fabric-explorer")
    }

    pub fn explorer_compose_path(&self) -> PathBuf {
        self.explorer_root().join("docker-compose.yaml")
    }
}
