mod friendship_repository_tests;
