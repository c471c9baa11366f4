mod layout;
mod seeds;
