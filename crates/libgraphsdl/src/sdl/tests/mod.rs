mod print_sdl_tests;
mod test_utils;
