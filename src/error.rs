//! Platform initialization and runtime errors.
//!
//! These are fatal: without a window, a surface and a GPU device the game
//! cannot run. The simulation itself has no error paths.

/// Failure to bring up or run the window and GPU.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop.
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop terminated with an error.
    EventLoopExecution(winit::error::EventLoopError),

    /// The OS refused to create the window.
    Window(winit::error::OsError),

    /// wgpu could not create a surface for the window.
    Surface(wgpu::CreateSurfaceError),

    /// No GPU adapter compatible with the surface.
    Adapter(wgpu::RequestAdapterError),

    /// Adapter found but device creation failed.
    Device(wgpu::RequestDeviceError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::Window(e) => write!(f, "Window creation failed: {}", e),
            Self::Surface(e) => write!(f, "Surface creation failed: {}", e),
            Self::Adapter(e) => write!(f, "No suitable GPU adapter: {}", e),
            Self::Device(e) => write!(f, "GPU device request failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::Window(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::Adapter(e) => Some(e),
            Self::Device(e) => Some(e),
        }
    }
}

impl From<winit::error::OsError> for PlatformError {
    fn from(e: winit::error::OsError) -> Self {
        Self::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for PlatformError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        Self::Surface(e)
    }
}

impl From<wgpu::RequestAdapterError> for PlatformError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        Self::Adapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for PlatformError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        Self::Device(e)
    }
}
