pub mod social_charges;
pub mod taxes;

pub use social_charges::{
    simulate_social_charges, SocialCharges, SocialChargesDetails, SocialChargesInput,
};
pub use taxes::{simulate_taxes, TaxDetails, TaxSimulation, TaxSimulationInput};
