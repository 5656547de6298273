// Platform-specific code module

pub mod gpu;

// Re-export commonly used items for cleaner imports
pub use gpu::CommandGpuProvider;
