use crate::core::Inspection;
use crate::data::Dependency;
use crate::effects::{FileMaterializer, FileProbe, OsFileMaterializer, OsFileProbe};
use crate::{Error, Result};
use unbundle_fs::WriteOptions;

/// Checks declared dependencies against the disk and extracts the ones that
/// do not match.
///
/// Holds no state between calls besides its two collaborators.
#[derive(Debug, Clone, Default)]
pub struct DependencyVerifier<P = OsFileProbe, M = OsFileMaterializer> {
    probe:        P,
    materializer: M,
}

impl DependencyVerifier {
    /// Verifier backed by the real filesystem.
    pub fn os() -> Self { Self::default() }

    pub fn os_with(options: WriteOptions) -> Self {
        Self::new(OsFileProbe, OsFileMaterializer::with_options(options))
    }
}

impl<P: FileProbe, M: FileMaterializer> DependencyVerifier<P, M> {
    pub fn new(probe: P, materializer: M) -> Self {
        Self {
            probe,
            materializer,
        }
    }

    pub fn probe(&self) -> &P { &self.probe }

    pub fn materializer(&self) -> &M { &self.materializer }

    /// Probe one dependency without writing anything.
    ///
    /// An absent file short-circuits: neither version nor size is queried.
    /// Both checks re-confirm existence, so a file that vanishes mid-check
    /// reads as a mismatch rather than a probe error.
    pub fn inspect(&self, dependency: &Dependency) -> Result<Inspection> {
        if !self.probe.exists(dependency.path()) {
            return Ok(Inspection::missing());
        }

        Ok(Inspection {
            exists:          true,
            version_matches: self.check_version(dependency)?,
            size_matches:    self.check_size(dependency)?,
        })
    }

    /// Extract every dependency that is missing or mismatched, in order.
    ///
    /// Returns `true` if at least one file was written. The first probe or
    /// write failure is returned as-is and the remaining dependencies are not
    /// visited.
    pub fn verify_and_extract_missing<'a, I>(&self, dependencies: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Dependency>,
    {
        let mut extracted = 0usize;

        for dependency in dependencies {
            let path = dependency.path();
            tracing::debug!(path = %path.display(), "processing dependency");

            let inspection = self.inspect(dependency)?;
            tracing::debug!(
                path = %path.display(),
                exists = inspection.exists,
                version_matches = inspection.version_matches,
                size_matches = inspection.size_matches,
                "dependency inspected"
            );

            if inspection.needs_extraction() {
                tracing::debug!(
                    path = %path.display(),
                    bytes = dependency.expected_size(),
                    "writing dependency"
                );
                self.materializer.write_bytes(path, dependency.payload())?;
                extracted += 1;
            }
        }

        if extracted > 0 {
            tracing::info!(count = extracted, "extracted bundled dependencies");
        }

        Ok(extracted > 0)
    }

    /// Like [`verify_and_extract_missing`](Self::verify_and_extract_missing),
    /// then runs `action` once if anything was extracted.
    ///
    /// Typical actions register a COM server or reload a library. The
    /// action's error is returned untouched.
    pub fn verify_and_extract_missing_then<'a, I, F, E>(
        &self,
        dependencies: I,
        action: F,
    ) -> std::result::Result<bool, E>
    where
        I: IntoIterator<Item = &'a Dependency>,
        F: FnOnce() -> std::result::Result<(), E>,
        E: From<Error>,
    {
        let extracted = self.verify_and_extract_missing(dependencies)?;
        if extracted {
            action()?;
        }
        Ok(extracted)
    }

    fn check_version(&self, dependency: &Dependency) -> Result<bool> {
        let Some(expected) = dependency.expected_version() else {
            return Ok(true);
        };

        let path = dependency.path();
        if !self.probe.exists(path) {
            return Ok(false);
        }

        Ok(self.probe.version(path)? == expected)
    }

    fn check_size(&self, dependency: &Dependency) -> Result<bool> {
        let path = dependency.path();
        if !self.probe.exists(path) {
            return Ok(false);
        }

        Ok(self.probe.size_in_bytes(path)? == dependency.expected_size())
    }
}
