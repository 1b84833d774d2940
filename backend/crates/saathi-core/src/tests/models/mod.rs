mod profile_patch;
mod profile_update;
mod user_profile;
