pub mod a001_compte;
pub mod a003_gestionnaire;
pub mod a004_frais;
pub mod a005_plan_comptable;
pub mod a006_retrait;
