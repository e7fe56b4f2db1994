use picture_api::{
    config::Config,
    domain::{
        picture::repository::PictureRepository,
        shared::pagination::{PAGE_SIZE, PageList, PageNavigation, Pagination, page_window},
    },
    infrastructure::repositories::in_memory_picture_repository::InMemoryPictureRepository,
};

fn repository_with(count: usize) -> InMemoryPictureRepository {
    InMemoryPictureRepository::from_config(&Config {
        mock_picture_count: count,
        ..Config::default()
    })
}

#[test]
fn every_page_is_full_except_the_last() {
    for total in [1usize, 9, 10, 11, 54, 60, 99] {
        let repo = repository_with(total);
        let page_count = Pagination::new(1, PAGE_SIZE, total as i64).page_count();

        for current in 1..=page_count {
            let len = repo.list(current, PAGE_SIZE).list.len() as i64;
            if current < page_count {
                assert_eq!(len, PAGE_SIZE, "total={total} current={current}");
            } else {
                assert_eq!(
                    len,
                    total as i64 - PAGE_SIZE * (page_count - 1),
                    "last page of total={total}"
                );
            }
        }
    }
}

#[test]
fn descriptor_is_echoed_verbatim() {
    let repo = repository_with(54);
    for current in [-4, 0, 1, 2, 6, 7, 1000] {
        assert_eq!(
            repo.list(current, PAGE_SIZE).pagination,
            Pagination::new(current, PAGE_SIZE, 54)
        );
    }
}

#[test]
fn sample_dataset_pages() {
    let repo = repository_with(54);
    assert_eq!(repo.list(1, PAGE_SIZE).list.len(), 10);
    assert_eq!(repo.list(7, PAGE_SIZE).list.len(), 0);

    let last = repo.list(6, PAGE_SIZE);
    let everything = repo.list(1, 54);
    assert_eq!(last.list.len(), 4);
    assert_eq!(last.list.as_slice(), &everything.list[50..54]);
}

#[test]
fn sample_dataset_windows() {
    let full: Vec<i64> = (1..=6).collect();
    assert_eq!(page_window(&Pagination::new(1, 10, 54)), full);
    assert_eq!(page_window(&Pagination::new(6, 10, 54)), full);

    let middle = page_window(&Pagination::new(3, 10, 54));
    assert!(middle.len() <= 10);
    assert!(middle.iter().all(|page| (1..=6).contains(page)));
}

#[test]
fn windows_are_ascending_and_contiguous() {
    for total in [0i64, 7, 54, 95, 250] {
        for current in -2..30 {
            let pages = page_window(&Pagination::new(current, 10, total));
            assert!(
                pages.windows(2).all(|pair| pair[1] == pair[0] + 1),
                "total={total} current={current} pages={pages:?}"
            );
        }
    }
}

#[test]
fn calls_are_idempotent() {
    let repo = repository_with(54);
    assert_eq!(repo.list(4, PAGE_SIZE), repo.list(4, PAGE_SIZE));

    let descriptor = Pagination::new(4, 10, 54);
    assert_eq!(page_window(&descriptor), page_window(&descriptor));
}

#[test]
fn empty_dataset_has_no_pages() {
    let repo = repository_with(0);
    let page: PageList<_> = repo.list(1, PAGE_SIZE);
    assert!(page.list.is_empty());
    assert!(page_window(&page.pagination).is_empty());

    let navigation = PageNavigation::from_pagination(page.pagination);
    assert_eq!(navigation.page_count, 0);
    assert!(navigation.previous_disabled());
    assert!(navigation.next_disabled());
}

#[test]
fn pagination_defaults_are_safe_and_stable() {
    let p = Pagination::default();
    assert_eq!(p.current, 1);
    assert_eq!(p.page_size, 10);
    assert_eq!(p.total, 0);
}
