use turntable::ipc::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Next,
    Previous,
    Select(usize),
    ConfigReload,
}

impl CarouselEvent {
    /// `status` is answered from the published snapshot and never reaches the loop.
    pub fn from_command(command: Command) -> Option<Self> {
        match command {
            Command::Next => Some(Self::Next),
            Command::Previous => Some(Self::Previous),
            Command::Select(i) => Some(Self::Select(i)),
            Command::Reload => Some(Self::ConfigReload),
            Command::Status => None,
        }
    }
}
