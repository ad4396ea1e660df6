mod tests_parsing;
mod tests_resolution;
mod tests_versions;
