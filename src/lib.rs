/// Use mimalloc as the global allocator for all binaries.
/// Faster than glibc malloc for the many short-lived output buffers
/// a codec call allocates.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod basenc;
pub mod common;
