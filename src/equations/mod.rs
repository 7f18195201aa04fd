//! Material and empirical parameters of the boiling closure.

mod parameters;

pub use parameters::{
    CONTACT_ANGLE_DEG, ClosureParameters, HFG, LAMBDA_L, LAMBDA_V, N0, PA_TO_MPA, RHO_L, T_SAT,
    T0, TCRIT,
};
