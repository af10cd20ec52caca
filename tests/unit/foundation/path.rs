use super::*;

#[test]
fn relative_paths_join_the_base() {
    let paths = PathResolver::new("/media/project");
    assert_eq!(paths.resolve("clip.avi"), "/media/project/clip.avi");
    assert_eq!(paths.resolve("./in/clip.avi"), "/media/project/in/clip.avi");
}

#[test]
fn parent_components_fold_lexically() {
    let paths = PathResolver::new("/media/project/sub");
    assert_eq!(paths.resolve("../clip.avi"), "/media/project/clip.avi");
    assert_eq!(paths.resolve("/a/b/../../../c"), "/c");
}

#[test]
fn absolute_paths_ignore_the_base() {
    let paths = PathResolver::new("/media");
    assert_eq!(paths.resolve("/srv/x.avs"), "/srv/x.avs");
}

#[test]
fn base_is_normalized() {
    let paths = PathResolver::new("/media/./a/../b");
    assert_eq!(paths.base(), Path::new("/media/b"));
}
