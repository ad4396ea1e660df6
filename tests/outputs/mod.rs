mod tests_bnd;
mod tests_files;
