mod center;
mod dialogs;
mod icons;
mod magnifier;
mod side;
mod status;
mod top;
