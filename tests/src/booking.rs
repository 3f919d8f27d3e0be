mod integration;
mod localization;
