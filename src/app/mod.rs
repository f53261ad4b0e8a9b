//! Application layer: per-concern state machines and their orchestration.
//!
//! This layer sits between a rendering surface (screens, a CLI, a test) and
//! the repository adapters. Each screen concern owns a [`StateCell`] holding
//! its current sealed-state variant; the view-model's trigger operations are
//! the only writers, and consumers observe through snapshots or watch-channel
//! subscriptions.
//!
//! ```text
//! Trigger operation → Loading → repository call → Success | Error
//!        ↑                                            │
//!        └────────── subscription notification ───────┘
//! ```
//!
//! # Modules
//!
//! - [`cell`]: Observable state container with stale-update detection
//! - [`state`]: Sealed per-concern UI state enums
//! - [`viewmodel`]: Trigger operations for the recipe concerns
//! - [`login`]: Login state holder with injected credential policy

pub mod cell;
pub mod login;
pub mod state;
pub mod viewmodel;

pub use cell::StateCell;
pub use login::{CredentialPolicy, LoginState, LoginViewModel, StaticCredentials};
pub use state::{FavoritesState, RecipeDetailsState, RecipeListState, SearchState};
pub use viewmodel::ForkTalesViewModel;
