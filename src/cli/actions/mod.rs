pub mod login;

use anyhow::Result;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
}

impl Action {
    /// Execute the selected action.
    ///
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        match self {
            Action::Login(args) => login::execute(args).await,
        }
    }
}
