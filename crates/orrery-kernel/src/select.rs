//! Backend selection: one entry point, interchangeable kernels.

use std::fmt;

use crate::kernel::ForceKernel;
use crate::reference::ReferenceKernel;
use crate::symmetric::SymmetricKernel;
use crate::vectorized::VectorizedKernel;

#[cfg(feature = "parallel")]
use crate::parallel::ParallelKernel;

/// The selectable kernel implementations.
///
/// All variants satisfy the same [`ForceKernel`] contract and agree
/// within floating-point tolerance; they differ in evaluation strategy
/// and cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelVariant {
    /// Every ordered pair. Verification baseline.
    Reference,
    /// Third-law pairing, half the pairwise work. The default.
    Symmetric,
    /// Pairwise-table formulation with a partner-axis reduction.
    Vectorized,
    /// Worker-parallel per-body accumulation (`parallel` feature).
    Parallel,
}

impl KernelVariant {
    /// Whether this variant was compiled into the current build.
    ///
    /// Only [`Parallel`](Self::Parallel) can be absent (the `parallel`
    /// feature is on by default but deployments may strip it).
    pub const fn is_available(self) -> bool {
        match self {
            Self::Parallel => cfg!(feature = "parallel"),
            _ => true,
        }
    }

    fn instantiate(self) -> Box<dyn ForceKernel> {
        match self {
            Self::Reference => Box::new(ReferenceKernel),
            Self::Symmetric => Box::new(SymmetricKernel),
            Self::Vectorized => Box::new(VectorizedKernel),
            #[cfg(feature = "parallel")]
            Self::Parallel => Box::new(ParallelKernel::new()),
            // Without the feature the selector resolves Parallel to
            // Symmetric before instantiating; this arm matches that.
            #[cfg(not(feature = "parallel"))]
            Self::Parallel => Box::new(SymmetricKernel),
        }
    }
}

impl fmt::Display for KernelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Reference => "reference",
            Self::Symmetric => "symmetric",
            Self::Vectorized => "vectorized",
            Self::Parallel => "parallel",
        };
        f.write_str(s)
    }
}

impl Default for KernelVariant {
    fn default() -> Self {
        Self::Symmetric
    }
}

/// The outcome of a kernel selection: which variant was asked for,
/// which actually runs, and the kernel handle itself.
///
/// Backend availability is an inspectable property of the selection,
/// not ambient global state; callers can always query what they got.
pub struct KernelSelection {
    requested: KernelVariant,
    resolved: KernelVariant,
    kernel: Box<dyn ForceKernel>,
}

impl KernelSelection {
    /// The variant the caller asked for (the default if unspecified).
    pub fn requested(&self) -> KernelVariant {
        self.requested
    }

    /// The variant that will actually run.
    pub fn resolved(&self) -> KernelVariant {
        self.resolved
    }

    /// True when the requested variant was unavailable and the selector
    /// substituted the default.
    pub fn fell_back(&self) -> bool {
        self.requested != self.resolved
    }

    /// Borrow the kernel handle.
    pub fn kernel(&self) -> &dyn ForceKernel {
        self.kernel.as_ref()
    }

    /// Take ownership of the kernel handle.
    pub fn into_kernel(self) -> Box<dyn ForceKernel> {
        self.kernel
    }
}

impl fmt::Debug for KernelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelSelection")
            .field("requested", &self.requested)
            .field("resolved", &self.resolved)
            .finish()
    }
}

/// Select a force kernel, falling back to the default when the request
/// cannot be honoured.
///
/// `None` requests the default ([`KernelVariant::Symmetric`]). An
/// unavailable variant is a warning-level event, never an error: the
/// selector logs through `tracing` and resolves to the default, and
/// [`KernelSelection::fell_back`] reports that it did so.
pub fn select_kernel(requested: Option<KernelVariant>) -> KernelSelection {
    let requested = requested.unwrap_or_default();
    let resolved = if requested.is_available() {
        requested
    } else {
        tracing::warn!(
            requested = %requested,
            resolved = %KernelVariant::default(),
            "kernel variant not compiled into this build, falling back"
        );
        KernelVariant::default()
    };

    KernelSelection {
        requested,
        resolved,
        kernel: resolved.instantiate(),
    }
}
